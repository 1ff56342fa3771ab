/// Next id for a collection member: one more than the largest id in use,
/// or `1` for an empty collection.
pub fn next_id(ids: impl IntoIterator<Item = u32>) -> u32 {
    ids.into_iter().max().unwrap_or(0).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::next_id;

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(Vec::<u32>::new()), 1);
        assert_eq!(next_id([1, 2, 3]), 4);
        assert_eq!(next_id([7, 2]), 8);
    }
}
