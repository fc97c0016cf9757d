//! Tests for the backtracking search driver and its step observation contract

#[cfg(test)]
mod tests {
    use mapcolor::MapColorError;
    use mapcolor::maps::samples::australia;
    use mapcolor::model::palette::Palette;
    use mapcolor::model::region::Region;
    use mapcolor::solver::backtrack::{
        BacktrackSolver, SolveOutcome, SolverConfig, Step, StepKind, solve, solve_with_observer,
    };
    use mapcolor::solver::ordering::RegionOrdering;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn config(palette_size: usize) -> SolverConfig {
        SolverConfig {
            palette_size,
            ..SolverConfig::default()
        }
    }

    fn triangle() -> Vec<Region> {
        vec![
            Region::new("a", "A", "").with_adjacent(["b", "c"]),
            Region::new("b", "B", "").with_adjacent(["a", "c"]),
            Region::new("c", "C", "").with_adjacent(["a", "b"]),
        ]
    }

    // Tests Australia colors without backtracking in most-constrained order
    // Verified by trying palette colors in reverse
    #[test]
    fn test_australia_first_solution() {
        let map = australia();
        let solver =
            BacktrackSolver::new(&map.regions, &Palette::default(), config(4)).expect("valid");
        let report = solver.run_silent();

        assert_eq!(report.stats.steps, 7);
        assert_eq!(report.stats.backtracks, 0);
        assert_eq!(report.stats.max_depth, 7);

        let coloring = report.outcome.into_coloring().expect("four colors suffice");
        assert_eq!(coloring.color_of("sa"), Some("#3B82F6"));
        assert_eq!(coloring.color_of("nt"), Some("#10B981"));
        assert_eq!(coloring.color_of("qld"), Some("#8B5CF6"));
        assert_eq!(coloring.color_of("nsw"), Some("#10B981"));
        assert_eq!(coloring.color_of("vic"), Some("#8B5CF6"));
        assert_eq!(coloring.color_of("wa"), Some("#8B5CF6"));
        assert_eq!(coloring.color_of("tas"), Some("#3B82F6"));
        assert_eq!(coloring.colors_used(), 3);
        assert_eq!(coloring.iter().count(), 7);
    }

    // Tests the exact step sequence of an exhausted search
    // Verified by skipping the backtrack notification
    #[test]
    fn test_unsatisfiable_step_sequence() {
        let map = australia();
        let solver =
            BacktrackSolver::new(&map.regions, &Palette::default(), config(2)).expect("valid");

        let mut seen: Vec<(StepKind, String, usize)> = Vec::new();
        let report = solver.run(&mut |step: &Step<'_>| {
            seen.push((step.kind, step.region_id().to_string(), step.color));
        });

        assert_eq!(report.outcome, SolveOutcome::Unsatisfiable);
        assert_eq!(report.stats.steps, 8);
        assert_eq!(report.stats.assignments, 4);
        assert_eq!(report.stats.backtracks, 4);

        let expected = [
            (StepKind::Assign, "sa", 0),
            (StepKind::Assign, "nt", 1),
            (StepKind::Backtrack, "nt", 1),
            (StepKind::Backtrack, "sa", 0),
            (StepKind::Assign, "sa", 1),
            (StepKind::Assign, "nt", 0),
            (StepKind::Backtrack, "nt", 0),
            (StepKind::Backtrack, "sa", 1),
        ];
        let expected: Vec<(StepKind, String, usize)> = expected
            .iter()
            .map(|&(kind, id, color)| (kind, id.to_string(), color))
            .collect();
        assert_eq!(seen, expected);
    }

    // Tests observers see the assignment as it stands after each move
    // Verified by notifying before applying the move
    #[test]
    fn test_step_snapshots() {
        let regions = triangle();
        let solver = BacktrackSolver::new(&regions, &Palette::default(), config(2)).expect("valid");

        let mut snapshots: Vec<Vec<Region>> = Vec::new();
        let mut numbers = Vec::new();
        solver.run(&mut |step: &Step<'_>| {
            numbers.push(step.number);
            let colored_here = step.assignment.get(step.region).is_some();
            assert_eq!(colored_here, step.kind == StepKind::Assign);
            snapshots.push(step.snapshot(&regions));
        });

        assert_eq!(numbers, (1..=8).collect::<Vec<_>>());
        let first = snapshots.first().expect("at least one step");
        assert_eq!(first.iter().filter(|r| r.color.is_some()).count(), 1);
        let third = snapshots.get(2).expect("backtrack step");
        assert_eq!(third.iter().filter(|r| r.color.is_some()).count(), 1);
        assert!(regions.iter().all(|r| r.color.is_none()));
    }

    // Tests step accessors expose region and palette values
    // Verified by returning the palette index instead of the value
    #[test]
    fn test_step_accessors() {
        let regions = triangle();
        let palette = Palette::new(["red", "green", "blue"]).expect("valid palette");
        let solver = BacktrackSolver::new(&regions, &palette, config(3)).expect("valid");

        let mut lines = Vec::new();
        solver.run(&mut |step: &Step<'_>| {
            let colored: Vec<String> = step
                .colors()
                .filter_map(|(id, color)| color.map(|c| format!("{id}={c}")))
                .collect();
            lines.push(format!(
                "{} {} {}",
                step.region_name(),
                step.color_value(),
                colored.join(",")
            ));
        });

        assert_eq!(
            lines,
            vec!["A red a=red", "B green a=red,b=green", "C blue a=red,b=green,c=blue"]
        );
    }

    // Tests the interrupt flag stops the search at the next attempt
    // Verified by never reading the flag
    #[test]
    fn test_interrupt() {
        let map = australia();
        let flag = Arc::new(AtomicBool::new(false));
        let solver = BacktrackSolver::new(&map.regions, &Palette::default(), config(4))
            .expect("valid")
            .with_interrupt(Arc::clone(&flag));

        let report = solver.run(&mut |step: &Step<'_>| {
            if step.number == 2 {
                flag.store(true, Ordering::Relaxed);
            }
        });

        assert_eq!(report.outcome, SolveOutcome::Interrupted);
        assert_eq!(report.stats.steps, 2);
    }

    // Tests every run starts from an uncolored assignment
    // Verified by reusing the assignment across runs
    #[test]
    fn test_runs_are_independent_and_deterministic() {
        let map = australia();
        let solver =
            BacktrackSolver::new(&map.regions, &Palette::default(), config(3)).expect("valid");

        let first = solver.run_silent();
        let second = solver.run_silent();
        assert_eq!(first, second);
        assert!(first.outcome.is_solved());
    }

    // Tests empty maps solve immediately and zero colors only fail non-empty maps
    // Verified by treating an empty map as unsatisfiable
    #[test]
    fn test_degenerate_inputs() {
        let palette = Palette::default();

        let empty = BacktrackSolver::new(&[], &palette, config(0)).expect("valid");
        let report = empty.run_silent();
        assert_eq!(report.stats.steps, 0);
        assert!(report.outcome.into_coloring().is_some_and(|c| c.is_empty()));

        let regions = vec![Region::new("solo", "Solo", "")];
        let none = BacktrackSolver::new(&regions, &palette, config(0)).expect("valid");
        assert_eq!(none.run_silent().outcome, SolveOutcome::Unsatisfiable);
    }

    // Tests requests beyond the palette fail instead of truncating
    // Verified by clamping the palette size
    #[test]
    fn test_palette_overflow_is_error() {
        let map = australia();
        let result = BacktrackSolver::new(&map.regions, &Palette::default(), config(5));
        assert!(matches!(
            result,
            Err(MapColorError::InvalidParameter {
                parameter: "max_colors",
                ..
            })
        ));
        assert!(solve(&map.regions, &Palette::default(), 5).is_err());
    }

    // Tests one-sided adjacency only constrains when symmetrized
    // Verified by always symmetrizing
    #[test]
    fn test_asymmetric_adjacency() {
        let regions = vec![
            Region::new("a", "A", "").with_adjacent(["b"]),
            Region::new("b", "B", ""),
        ];
        let palette = Palette::default();

        let plain = BacktrackSolver::new(&regions, &palette, config(2)).expect("valid");
        let coloring = plain.run_silent().outcome.into_coloring().expect("solvable");
        assert_eq!(coloring.color_index("a"), Some(0));
        assert_eq!(coloring.color_index("b"), Some(0));

        let mutual = SolverConfig {
            symmetrize: true,
            ..config(2)
        };
        let symmetric = BacktrackSolver::new(&regions, &palette, mutual).expect("valid");
        let coloring = symmetric.run_silent().outcome.into_coloring().expect("solvable");
        assert_eq!(coloring.color_index("a"), Some(0));
        assert_eq!(coloring.color_index("b"), Some(1));
    }

    // Tests input ordering changes the visit order but not validity
    // Verified by ignoring the configured ordering
    #[test]
    fn test_input_ordering() {
        let map = australia();
        let input = SolverConfig {
            ordering: RegionOrdering::InputOrder,
            ..config(3)
        };
        let solver = BacktrackSolver::new(&map.regions, &Palette::default(), input).expect("valid");
        assert_eq!(solver.order(), &[0, 1, 2, 3, 4, 5, 6]);

        let coloring = solver.run_silent().outcome.into_coloring().expect("solvable");
        assert_eq!(coloring.color_of("wa"), Some("#3B82F6"));
        for region in &map.regions {
            for adjacent in &region.adjacent {
                assert_ne!(coloring.color_of(&region.id), coloring.color_of(adjacent));
            }
        }
    }

    // Tests the free functions return fresh colored regions and leave input untouched
    // Verified by coloring the input regions in place
    #[test]
    fn test_solve_functions() {
        let regions = triangle();
        let palette = Palette::default();

        assert_eq!(solve(&regions, &palette, 2).expect("valid"), None);

        let mut steps = 0;
        let colored = solve_with_observer(&regions, &palette, 3, &mut |_: &Step<'_>| steps += 1)
            .expect("valid")
            .expect("three colors suffice");
        assert_eq!(steps, 3);
        assert!(colored.iter().all(|r| r.color.is_some()));
        assert!(regions.iter().all(|r| r.color.is_none()));
        assert_eq!(colored.len(), regions.len());
    }
}
