use rand::{distributions::Alphanumeric, Rng};

/// Creates a random alphanumeric secret of the given length.
///
/// Used as a fallback signing secret when none is configured.
pub fn create_random_secret(secret_len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(secret_len)
        .map(char::from)
        .collect()
}
