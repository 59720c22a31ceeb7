use eight_puzzle::{
    astar_linear_conflict, astar_manhattan, dfs, Board, Heuristic, HeuristicKind, Solver,
    SolverConfig, GOAL,
};

fn replay(start: &str, moves: &[eight_puzzle::Direction]) -> Board {
    start
        .parse::<Board>()
        .unwrap()
        .apply_all(moves)
        .unwrap()
}

#[test]
fn solves_hardest_boards_in_31_moves() {
    for start in ["8672543_1", "64785_321"] {
        let moves = astar_manhattan(start).unwrap().unwrap();
        assert_eq!(moves.len(), 31, "{}", start);
        assert_eq!(replay(start, &moves).to_string(), GOAL);

        let moves = astar_linear_conflict(start).unwrap().unwrap();
        assert_eq!(moves.len(), 31, "{}", start);
    }
}

#[test]
fn stronger_heuristics_expand_fewer_nodes() {
    let run = |heuristic: HeuristicKind| {
        Solver::new(SolverConfig::new().with_heuristic(heuristic))
            .solve("_87654321")
            .unwrap()
    };

    let hamming = run(HeuristicKind::Hamming);
    let manhattan = run(HeuristicKind::Manhattan);
    let conflict = run(HeuristicKind::LinearConflict);

    assert_eq!(hamming.actions().unwrap().len(), 28);
    assert_eq!(manhattan.actions().unwrap().len(), 28);
    assert_eq!(conflict.actions().unwrap().len(), 28);
    assert!(manhattan.stats().expanded < hamming.stats().expanded);
    assert!(conflict.stats().expanded <= manhattan.stats().expanded);
}

#[test]
fn custom_heuristic_plugs_into_astar() {
    struct Zero;

    impl Heuristic for Zero {
        fn estimate(&self, _: &Board) -> u32 {
            0
        }
    }

    let moves = eight_puzzle::solve_astar("123_45678", Zero).unwrap().unwrap();
    assert_eq!(moves.len(), 15);
}

#[test]
fn depth_first_solution_replays_to_goal() {
    let start = "_12345678";
    let moves = dfs(start).unwrap().unwrap();

    assert!(moves.len() >= 22);
    assert!(replay(start, &moves).is_goal());
}
