/// Longest output of [`itoa`]: `"-2147483648"`.
pub const ITOA_LEN: usize = 11;

/// Format `n` as decimal into `buf`, returning the written prefix.
///
/// No leading zeros, no `+`, a leading `-` for negative values. `i32::MIN` is handled via
/// its unsigned magnitude, so it formats as `"-2147483648"`.
pub fn itoa(n: i32, buf: &mut [u8; ITOA_LEN]) -> &str {
    let mut magnitude = n.unsigned_abs();
    let mut len = 0;

    // least significant digit first
    loop {
        buf[len] = b'0' + (magnitude % 10) as u8;
        len += 1;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    if n < 0 {
        buf[len] = b'-';
        len += 1;
    }

    let digits = &mut buf[..len];
    digits.reverse();

    // only ASCII digits and '-' were written
    match core::str::from_utf8(digits) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    }
}
