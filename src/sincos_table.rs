/*
 * // Copyright (c) Radzivon Bartoshyk 8/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

/// Precomputed data for the base angle B = M*pi/32, M = 0..63.
///
/// `sigma` is an exact power of two (+-1 or +-1/2) picked as the nearest
/// coarse bucket to cos(B), so that `sigma * r` is exact for any reduced r.
/// `sigma + c_hl` carries cos(B) and `s_hi + s_lo` carries sin(B), both to
/// roughly 2^-104.
#[derive(Copy, Clone, Debug)]
pub(crate) struct AngleEntry {
    pub(crate) sigma: f64,
    pub(crate) c_hl: f64,
    pub(crate) s_hi: f64,
    pub(crate) s_lo: f64,
}

// Raw bit patterns (sigma, c_hl, s_hi, s_lo), one entry per pi/32 step of
// the full turn.
static SINCOS_PI_OVER_32: [(u64, u64, u64, u64); 64] = [
    (
        0x3ff0000000000000,
        0x0000000000000000,
        0x0000000000000000,
        0x0000000000000000,
    ),
    (
        0x3ff0000000000000,
        0xbf73b92e176d6d31,
        0x3fb917a6bc29b42c,
        0xbc3e2718d26ed688,
    ),
    (
        0x3ff0000000000000,
        0xbf93ad06011469fb,
        0x3fc8f8b83c69a60b,
        0xbc626d19b9ff8d82,
    ),
    (
        0x3ff0000000000000,
        0xbfa60bea939d225a,
        0x3fd294062ed59f06,
        0xbc75d28da2c4612d,
    ),
    (
        0x3ff0000000000000,
        0xbfb37ca1866b95cf,
        0x3fd87de2a6aea963,
        0xbc672cedd3d5a610,
    ),
    (
        0x3ff0000000000000,
        0xbfbe3a6873fa1279,
        0x3fde2b5d3806f63b,
        0x3c5e0d891d3c6841,
    ),
    (
        0x3ff0000000000000,
        0xbfc592675bc57974,
        0x3fe1c73b39ae68c8,
        0x3c8b25dd267f6600,
    ),
    (
        0x3ff0000000000000,
        0xbfcd0dfe53aba2fd,
        0x3fe44cf325091dd6,
        0x3c68076a2cfdc6b3,
    ),
    (
        0x3fe0000000000000,
        0x3fca827999fcef32,
        0x3fe6a09e667f3bcd,
        0xbc8bdd3413b26456,
    ),
    (
        0x3fe0000000000000,
        0x3fc133cc94247758,
        0x3fe8bc806b151741,
        0xbc82c5e12ed1336d,
    ),
    (
        0x3fe0000000000000,
        0x3fac73b39ae68c87,
        0x3fea9b66290ea1a3,
        0x3c39f630e8b6dac8,
    ),
    (
        0x3fe0000000000000,
        0xbf9d4a2c7f909c4e,
        0x3fec38b2f180bdb1,
        0xbc76e0b1757c8d07,
    ),
    (
        0x3fe0000000000000,
        0xbfbe087565455a75,
        0x3fed906bcf328d46,
        0x3c7457e610231ac2,
    ),
    (
        0x3fe0000000000000,
        0xbfcad7f3a254c1f5,
        0x3fee9f4156c62dda,
        0x3c8760b1e2e3f81e,
    ),
    (
        0x3fe0000000000000,
        0xbfd383a3e1cb2cfb,
        0x3fef6297cff75cb0,
        0x3c7562172a361fd3,
    ),
    (
        0x3fe0000000000000,
        0xbfd9ba1650f592f5,
        0x3fefd88da3d12526,
        0xbc887df6378811c7,
    ),
    (
        0xbfe0000000000000,
        0x3fe0000000000000,
        0x3ff0000000000000,
        0x0000000000000000,
    ),
    (
        0xbfe0000000000000,
        0x3fd9ba1650f592f5,
        0x3fefd88da3d12526,
        0xbc887df6378811c7,
    ),
    (
        0xbfe0000000000000,
        0x3fd383a3e1cb2cfb,
        0x3fef6297cff75cb0,
        0x3c7562172a361fd3,
    ),
    (
        0xbfe0000000000000,
        0x3fcad7f3a254c1f5,
        0x3fee9f4156c62dda,
        0x3c8760b1e2e3f81e,
    ),
    (
        0xbfe0000000000000,
        0x3fbe087565455a75,
        0x3fed906bcf328d46,
        0x3c7457e610231ac2,
    ),
    (
        0xbfe0000000000000,
        0x3f9d4a2c7f909c4e,
        0x3fec38b2f180bdb1,
        0xbc76e0b1757c8d07,
    ),
    (
        0xbfe0000000000000,
        0xbfac73b39ae68c87,
        0x3fea9b66290ea1a3,
        0x3c39f630e8b6dac8,
    ),
    (
        0xbfe0000000000000,
        0xbfc133cc94247758,
        0x3fe8bc806b151741,
        0xbc82c5e12ed1336d,
    ),
    (
        0xbfe0000000000000,
        0xbfca827999fcef32,
        0x3fe6a09e667f3bcd,
        0xbc8bdd3413b26456,
    ),
    (
        0xbff0000000000000,
        0x3fcd0dfe53aba2fd,
        0x3fe44cf325091dd6,
        0x3c68076a2cfdc6b3,
    ),
    (
        0xbff0000000000000,
        0x3fc592675bc57974,
        0x3fe1c73b39ae68c8,
        0x3c8b25dd267f6600,
    ),
    (
        0xbff0000000000000,
        0x3fbe3a6873fa1279,
        0x3fde2b5d3806f63b,
        0x3c5e0d891d3c6841,
    ),
    (
        0xbff0000000000000,
        0x3fb37ca1866b95cf,
        0x3fd87de2a6aea963,
        0xbc672cedd3d5a610,
    ),
    (
        0xbff0000000000000,
        0x3fa60bea939d225a,
        0x3fd294062ed59f06,
        0xbc75d28da2c4612d,
    ),
    (
        0xbff0000000000000,
        0x3f93ad06011469fb,
        0x3fc8f8b83c69a60b,
        0xbc626d19b9ff8d82,
    ),
    (
        0xbff0000000000000,
        0x3f73b92e176d6d31,
        0x3fb917a6bc29b42c,
        0xbc3e2718d26ed688,
    ),
    (
        0xbff0000000000000,
        0x0000000000000000,
        0x0000000000000000,
        0x0000000000000000,
    ),
    (
        0xbff0000000000000,
        0x3f73b92e176d6d31,
        0xbfb917a6bc29b42c,
        0x3c3e2718d26ed688,
    ),
    (
        0xbff0000000000000,
        0x3f93ad06011469fb,
        0xbfc8f8b83c69a60b,
        0x3c626d19b9ff8d82,
    ),
    (
        0xbff0000000000000,
        0x3fa60bea939d225a,
        0xbfd294062ed59f06,
        0x3c75d28da2c4612d,
    ),
    (
        0xbff0000000000000,
        0x3fb37ca1866b95cf,
        0xbfd87de2a6aea963,
        0x3c672cedd3d5a610,
    ),
    (
        0xbff0000000000000,
        0x3fbe3a6873fa1279,
        0xbfde2b5d3806f63b,
        0xbc5e0d891d3c6841,
    ),
    (
        0xbff0000000000000,
        0x3fc592675bc57974,
        0xbfe1c73b39ae68c8,
        0xbc8b25dd267f6600,
    ),
    (
        0xbff0000000000000,
        0x3fcd0dfe53aba2fd,
        0xbfe44cf325091dd6,
        0xbc68076a2cfdc6b3,
    ),
    (
        0xbfe0000000000000,
        0xbfca827999fcef32,
        0xbfe6a09e667f3bcd,
        0x3c8bdd3413b26456,
    ),
    (
        0xbfe0000000000000,
        0xbfc133cc94247758,
        0xbfe8bc806b151741,
        0x3c82c5e12ed1336d,
    ),
    (
        0xbfe0000000000000,
        0xbfac73b39ae68c87,
        0xbfea9b66290ea1a3,
        0xbc39f630e8b6dac8,
    ),
    (
        0xbfe0000000000000,
        0x3f9d4a2c7f909c4e,
        0xbfec38b2f180bdb1,
        0x3c76e0b1757c8d07,
    ),
    (
        0xbfe0000000000000,
        0x3fbe087565455a75,
        0xbfed906bcf328d46,
        0xbc7457e610231ac2,
    ),
    (
        0xbfe0000000000000,
        0x3fcad7f3a254c1f5,
        0xbfee9f4156c62dda,
        0xbc8760b1e2e3f81e,
    ),
    (
        0xbfe0000000000000,
        0x3fd383a3e1cb2cfb,
        0xbfef6297cff75cb0,
        0xbc7562172a361fd3,
    ),
    (
        0xbfe0000000000000,
        0x3fd9ba1650f592f5,
        0xbfefd88da3d12526,
        0x3c887df6378811c7,
    ),
    (
        0xbfe0000000000000,
        0x3fe0000000000000,
        0xbff0000000000000,
        0x0000000000000000,
    ),
    (
        0x3fe0000000000000,
        0xbfd9ba1650f592f5,
        0xbfefd88da3d12526,
        0x3c887df6378811c7,
    ),
    (
        0x3fe0000000000000,
        0xbfd383a3e1cb2cfb,
        0xbfef6297cff75cb0,
        0xbc7562172a361fd3,
    ),
    (
        0x3fe0000000000000,
        0xbfcad7f3a254c1f5,
        0xbfee9f4156c62dda,
        0xbc8760b1e2e3f81e,
    ),
    (
        0x3fe0000000000000,
        0xbfbe087565455a75,
        0xbfed906bcf328d46,
        0xbc7457e610231ac2,
    ),
    (
        0x3fe0000000000000,
        0xbf9d4a2c7f909c4e,
        0xbfec38b2f180bdb1,
        0x3c76e0b1757c8d07,
    ),
    (
        0x3fe0000000000000,
        0x3fac73b39ae68c87,
        0xbfea9b66290ea1a3,
        0xbc39f630e8b6dac8,
    ),
    (
        0x3fe0000000000000,
        0x3fc133cc94247758,
        0xbfe8bc806b151741,
        0x3c82c5e12ed1336d,
    ),
    (
        0x3fe0000000000000,
        0x3fca827999fcef32,
        0xbfe6a09e667f3bcd,
        0x3c8bdd3413b26456,
    ),
    (
        0x3ff0000000000000,
        0xbfcd0dfe53aba2fd,
        0xbfe44cf325091dd6,
        0xbc68076a2cfdc6b3,
    ),
    (
        0x3ff0000000000000,
        0xbfc592675bc57974,
        0xbfe1c73b39ae68c8,
        0xbc8b25dd267f6600,
    ),
    (
        0x3ff0000000000000,
        0xbfbe3a6873fa1279,
        0xbfde2b5d3806f63b,
        0xbc5e0d891d3c6841,
    ),
    (
        0x3ff0000000000000,
        0xbfb37ca1866b95cf,
        0xbfd87de2a6aea963,
        0x3c672cedd3d5a610,
    ),
    (
        0x3ff0000000000000,
        0xbfa60bea939d225a,
        0xbfd294062ed59f06,
        0x3c75d28da2c4612d,
    ),
    (
        0x3ff0000000000000,
        0xbf93ad06011469fb,
        0xbfc8f8b83c69a60b,
        0x3c626d19b9ff8d82,
    ),
    (
        0x3ff0000000000000,
        0xbf73b92e176d6d31,
        0xbfb917a6bc29b42c,
        0x3c3e2718d26ed688,
    ),
];

/// Returns the decoded entry for grid index `idx`, taken modulo 64.
#[inline]
pub(crate) fn angle_entry(idx: i32) -> AngleEntry {
    let (sigma, c_hl, s_hi, s_lo) = SINCOS_PI_OVER_32[(idx & 63) as usize];
    AngleEntry {
        sigma: f64::from_bits(sigma),
        c_hl: f64::from_bits(c_hl),
        s_hi: f64::from_bits(s_hi),
        s_lo: f64::from_bits(s_lo),
    }
}
