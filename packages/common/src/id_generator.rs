use crc32fast::Hasher;

/// Checksum id for a view, derived from its name. The same name always
/// yields the same id, so re-importing a document reproduces its ids.
pub fn get_view_id(name: &str) -> String {
    let mut hasher = Hasher::new();
    if !name.starts_with("view://") {
        hasher.update(b"view://");
    }
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Hands out node ids within one view: the view's checksum seed joined
/// with a sequential counter (`<seed>-1`, `<seed>-2`, ...).
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(view_name: &str) -> Self {
        Self {
            seed: get_view_id(view_name),
            count: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_same_seed() {
        assert_eq!(get_view_id("Landing"), get_view_id("Landing"));
        assert_ne!(get_view_id("Landing"), get_view_id("Dashboard"));
    }

    #[test]
    fn test_scheme_prefix_is_implied() {
        assert_eq!(get_view_id("view://Landing"), get_view_id("Landing"));
    }

    #[test]
    fn test_generator_counts_up_from_seed() {
        let mut ids = IdGenerator::new("Landing");
        let seed = ids.seed().to_string();

        assert_eq!(ids.next_id(), format!("{}-1", seed));
        assert_eq!(ids.next_id(), format!("{}-2", seed));
    }

    #[test]
    fn test_fresh_generator_replays_the_sequence() {
        let mut a = IdGenerator::new("Landing");
        let mut b = IdGenerator::new("Landing");
        assert_eq!(a.next_id(), b.next_id());
    }
}
