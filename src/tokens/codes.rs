/// Code and identifier generation for token flows
///
/// Two flavors of secret are minted here:
///
/// - **OTP codes**: 6 decimal digits, sent to the user by email. Easy to
///   type, only valid for a short window, and guarded against brute force
///   by the API layer's rate limiting.
/// - **Invitation identifiers**: 32 base62 chars used as the subject of an
///   `invite:` key. Key space 62^32, so invitation links cannot be guessed
///   within their 24h window.

use rand::Rng;

/// Number of digits in an OTP code
pub const OTP_LENGTH: usize = 6;

/// Length of a generated invitation identifier (characters)
pub const INVITE_ID_LENGTH: usize = 32;

/// Generates a 6-digit OTP code
///
/// The code is uniformly distributed over 100000..=999999, so it always has
/// exactly six digits with no leading zero.
///
/// # Example
///
/// ```
/// use crewtask_core::tokens::generate_otp;
///
/// let otp = generate_otp();
/// assert_eq!(otp.len(), 6);
/// assert!(otp.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn generate_otp() -> String {
    let mut rng = rand::thread_rng();
    rng.gen_range(100_000..1_000_000u32).to_string()
}

/// Generates a high-entropy invitation identifier
///
/// Base62 (A-Z, a-z, 0-9) for URL-safe invitation links.
///
/// # Example
///
/// ```
/// use crewtask_core::tokens::generate_invite_id;
///
/// let id = generate_invite_id();
/// assert_eq!(id.len(), 32);
/// assert!(id.chars().all(|c| c.is_alphanumeric()));
/// ```
pub fn generate_invite_id() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();

    (0..INVITE_ID_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Compares a submitted code against the stored one in constant time
///
/// The comparison time doesn't depend on which characters match, so timing
/// doesn't leak information about the stored code. Length mismatch returns
/// false immediately; code length is public (always 6 digits).
///
/// # Example
///
/// ```
/// use crewtask_core::tokens::codes_match;
///
/// assert!(codes_match("123456", "123456"));
/// assert!(!codes_match("123456", "123457"));
/// assert!(!codes_match("123456", "12345"));
/// ```
pub fn codes_match(submitted: &str, stored: &str) -> bool {
    if submitted.len() != stored.len() {
        return false;
    }

    let mut diff = 0u8;
    for (a, b) in submitted.bytes().zip(stored.bytes()) {
        diff |= a ^ b;
    }
    diff == 0
}
