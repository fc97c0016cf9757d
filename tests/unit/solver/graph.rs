//! Tests for region id resolution and neighbor lists

#[cfg(test)]
mod tests {
    use mapcolor::MapColorError;
    use mapcolor::model::region::Region;
    use mapcolor::solver::graph::ConstraintGraph;

    fn region(id: &str, adjacent: &[&str]) -> Region {
        Region::new(id, id.to_uppercase(), "").with_adjacent(adjacent.iter().copied())
    }

    // Tests ids resolve to input positions and neighbors to indices
    // Verified by reversing the index assignment
    #[test]
    fn test_resolution() {
        let regions = vec![region("a", &["b"]), region("b", &["a", "c"]), region("c", &["b"])];
        let graph = ConstraintGraph::from_regions(&regions).expect("unique ids");

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.index_of("c"), Some(2));
        assert_eq!(graph.id(1), Some("b"));
        assert_eq!(graph.name(1), Some("B"));
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert_eq!(graph.degree(0), 1);
        assert!(graph.dangling().is_empty());
    }

    // Tests duplicate ids fail construction
    // Verified by letting later duplicates overwrite earlier ones
    #[test]
    fn test_duplicate_ids() {
        let regions = vec![region("a", &[]), region("a", &[])];
        let result = ConstraintGraph::from_regions(&regions);
        assert!(matches!(result, Err(MapColorError::DuplicateRegion { .. })));
    }

    // Tests dangling, self and repeated references are dropped
    // Verified by keeping dangling references as constraints
    #[test]
    fn test_ignored_references() {
        let regions = vec![region("a", &["a", "b", "b", "ghost"]), region("b", &["a"])];
        let graph = ConstraintGraph::from_regions(&regions).expect("unique ids");

        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(
            graph.dangling(),
            &[("a".to_string(), "ghost".to_string())]
        );
        assert!(graph.neighbors(9).is_empty());
        assert_eq!(graph.index_of("ghost"), None);
    }

    // Tests one-sided edges stay one-sided unless symmetrized
    // Verified by always adding reverse edges
    #[test]
    fn test_symmetric_construction() {
        let regions = vec![region("a", &["b"]), region("b", &[])];

        let plain = ConstraintGraph::from_regions(&regions).expect("unique ids");
        assert_eq!(plain.neighbors(0), &[1]);
        assert!(plain.neighbors(1).is_empty());

        let mutual = ConstraintGraph::symmetric_from_regions(&regions).expect("unique ids");
        assert_eq!(mutual.neighbors(0), &[1]);
        assert_eq!(mutual.neighbors(1), &[0]);
    }
}
