//! Short random identifier sampling

use rand::Rng;

/// Alphabet for sampled identifiers (base-36, lowercase)
const TAG_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Prefix applied by [`sample_id`]
pub const ID_PREFIX: &str = "ID_";

/// Length of the random portion of a sampled identifier
pub const ID_TAG_LEN: usize = 8;

/// Sample a short opaque identifier: `ID_` plus 8 base-36 characters.
///
/// The tag is an opaque handle, not a collision-proof key; callers that
/// need global uniqueness should use a longer [`random_tag`].
pub fn sample_id() -> String {
    format!("{}{}", ID_PREFIX, random_tag(ID_TAG_LEN))
}

/// Sample `len` random characters from the base-36 alphabet
pub fn random_tag(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..TAG_CHARSET.len());
            TAG_CHARSET[idx] as char
        })
        .collect()
}
