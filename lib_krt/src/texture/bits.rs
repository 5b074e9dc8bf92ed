//! Widening of narrow colour channels to 8 bits.
//!
//! The hardware replicates the high bits of a channel into the freed low
//! bits rather than scaling, so `0` stays `0` and an all-ones value becomes
//! `255`. Inputs are masked to their nominal width first.

#[inline]
pub const fn expand3(v: u8) -> u8 {
    let v = v & 0x07;
    (v << 5) | (v << 2) | (v >> 1)
}

#[inline]
pub const fn expand4(v: u8) -> u8 {
    let v = v & 0x0F;
    (v << 4) | v
}

#[inline]
pub const fn expand5(v: u8) -> u8 {
    let v = v & 0x1F;
    (v << 3) | (v >> 2)
}

#[inline]
pub const fn expand6(v: u8) -> u8 {
    let v = v & 0x3F;
    (v << 2) | (v >> 4)
}
