//! Dataset identifier generation.

/// Length of the random portion of a dataset id.
const ID_LEN: usize = 16;

/// Generate a collision-resistant dataset identifier.
///
/// Ids are `ds_` followed by 16 random alphanumerics (62^16 keyspace),
/// drawn from thread-local entropy. No ordering guarantee.
pub fn new_dataset_id() -> String {
    let mut id = String::with_capacity(3 + ID_LEN);
    id.push_str("ds_");
    for _ in 0..ID_LEN {
        id.push(fastrand::alphanumeric());
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_shape() {
        let id = new_dataset_id();

        assert!(id.starts_with("ds_"));
        assert_eq!(id.len(), 3 + ID_LEN);
        assert!(id[3..].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_ids_do_not_repeat() {
        let ids: HashSet<String> = (0..1000).map(|_| new_dataset_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
