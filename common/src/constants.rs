/// The Bitcoin Base58 alphabet. `0`, `O`, `I` and `l` are left out.
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of a seed + public key keypair.
pub const SECRET_KEY_LEN: usize = 64;

/// Offset of the public key inside a `SECRET_KEY_LEN` keypair.
pub const PUBLIC_KEY_OFFSET: usize = 32;

pub const DEFAULT_SECRET_LABEL: &str = "Base58 비밀키";
pub const DEFAULT_PUBLIC_LABEL: &str = "Base58 공개키";
