use seat_automaton::{
    adjacent_occupied_count, visible_occupied_counts, CellState, ChgForOccupiedN, Env8Neighbors,
    Grid, OccupiedCounter, Policy, Position, SeatMap, Visible8Neighbors,
};

const STEP_0: &str = "\
L.LL.LL.LL
LLLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLLL
L.LLLLLL.L
L.LLLLL.LL";

const STEP_1: &str = "\
#.##.##.##
#######.##
#.#.#..#..
####.##.##
#.##.##.##
#.#####.##
..#.#.....
##########
#.######.#
#.#####.##";

const STEP_2: &str = "\
#.LL.L#.##
#LLLLLL.L#
L.L.L..L..
#LLL.LL.L#
#.LL.LL.LL
#.LLLL#.##
..L.L.....
#LLLLLLLL#
#.LLLLLL.L
#.#LLLL.##";

const VISIBLE_STEP_2: &str = "\
#.LL.LL.L#
#LLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLL#
#.LLLLLL.L
#.LLLLL.L#";

const SEES_EIGHT: &str = "\
.......#.
...#.....
.#.......
.........
..#L....#
....#....
.........
#........
...#.....";

const SEES_NONE: &str = "\
.##.##.
#.#.#.#
##...##
...L...
##...##
#.#.#.#
.##.##.";

fn seat_map(text: &str) -> SeatMap {
    text.parse().unwrap()
}

fn counts(rows: Vec<Vec<usize>>) -> Grid<usize> {
    Grid::from_rows(rows).unwrap()
}

fn positions(grid: &SeatMap) -> Vec<Position> {
    (0..grid.row_n())
        .flat_map(|r| (0..grid.col_n()).map(move |c| Position::new(r, c)))
        .collect()
}

#[test]
fn adjacent_count_at_corners() {
    assert_eq!(adjacent_occupied_count(&seat_map(STEP_1), 0, 0), 2);
    assert_eq!(adjacent_occupied_count(&seat_map(STEP_2), 0, 9), 2);
}

#[test]
fn adjacent_count_of_full_square() {
    let full = seat_map("###\n###\n###");
    assert_eq!(adjacent_occupied_count(&full, 1, 1), 8);
    assert_eq!(adjacent_occupied_count(&full, 0, 0), 3);
    assert_eq!(adjacent_occupied_count(&full, 0, 1), 5);
    // Cells outside the grid have neighbors too.
    assert_eq!(adjacent_occupied_count(&full, -1, -1), 1);
    assert_eq!(adjacent_occupied_count(&full, 5, 5), 0);
}

#[test]
fn adjacent_count_far_outside_grid() {
    let full = seat_map("##\n##");
    for (r, c) in [
        (isize::MAX, 0),
        (0, isize::MAX),
        (isize::MIN, 0),
        (0, isize::MIN),
        (isize::MAX, isize::MIN),
    ] {
        assert_eq!(adjacent_occupied_count(&full, r, c), 0, "at ({}, {})", r, c);
    }
}

#[test]
fn adjacent_counter_covers_every_cell() {
    let sm = seat_map(STEP_2);
    let all_counts = Env8Neighbors.occupied_counts(&sm);
    assert_eq!(all_counts.row_n(), sm.row_n());
    assert_eq!(all_counts.col_n(), sm.col_n());
    for pos in positions(&sm) {
        assert_eq!(
            all_counts[pos],
            adjacent_occupied_count(&sm, pos.r as isize, pos.c as isize),
            "at {}",
            pos
        );
    }
}

#[test]
fn visible_counts_of_small_layouts() {
    assert_eq!(
        visible_occupied_counts(&seat_map("#.\n.#")),
        counts(vec![vec![1, 0], vec![0, 1]])
    );
    assert_eq!(
        visible_occupied_counts(&seat_map("#.#\n...\n#.#")),
        counts(vec![vec![3, 0, 3], vec![0, 0, 0], vec![3, 0, 3]])
    );
    assert_eq!(
        visible_occupied_counts(&seat_map("###\n###\n###")),
        counts(vec![vec![3, 5, 3], vec![5, 8, 5], vec![3, 5, 3]])
    );
}

#[test]
fn visible_counts_through_floor() {
    assert_eq!(visible_occupied_counts(&seat_map(SEES_EIGHT))[Position::new(4, 3)], 8);

    let sees_none = visible_occupied_counts(&seat_map(SEES_NONE));
    assert_eq!(sees_none[Position::new(0, 1)], 4);
    assert_eq!(sees_none[Position::new(3, 3)], 0);
}

#[test]
fn empty_seat_blocks_sight() {
    // The empty seat hides the occupied one behind it.
    let sight = visible_occupied_counts(&seat_map(".L..L.#"));
    assert_eq!(sight, counts(vec![vec![0, 0, 0, 0, 1, 0, 0]]));
}

#[test]
fn single_row_and_column_walked_once() {
    assert_eq!(visible_occupied_counts(&seat_map("###")), counts(vec![vec![1, 2, 1]]));
    assert_eq!(
        visible_occupied_counts(&seat_map("#\n#\n#")),
        counts(vec![vec![1], vec![2], vec![1]])
    );
    assert_eq!(visible_occupied_counts(&seat_map("#")), counts(vec![vec![0]]));
}

#[test]
fn visible_counts_of_full_squares() {
    for n in 3..=7 {
        let full = seat_map(&vec!["#".repeat(n); n].join("\n"));
        let sight = visible_occupied_counts(&full);
        let last = n - 1;
        let (mut corner_n, mut edge_n, mut inner_n) = (0, 0, 0);
        for pos in positions(&full) {
            let on_row_edge = pos.r == 0 || pos.r == last;
            let on_col_edge = pos.c == 0 || pos.c == last;
            let expect = match (on_row_edge, on_col_edge) {
                (true, true) => {
                    corner_n += 1;
                    3
                }
                (true, false) | (false, true) => {
                    edge_n += 1;
                    5
                }
                (false, false) => {
                    inner_n += 1;
                    8
                }
            };
            assert_eq!(sight[pos], expect, "at {} in {} x {} grid", pos, n, n);
        }
        assert_eq!(corner_n, 4);
        assert_eq!(edge_n, 4 * (n - 2));
        assert_eq!(inner_n, (n - 2) * (n - 2));
    }
}

#[test]
fn visible_counter_matches_free_function() {
    let sm = seat_map(STEP_1);
    assert_eq!(Visible8Neighbors.occupied_counts(&sm), visible_occupied_counts(&sm));
}

#[test]
fn rule_changes_seats_only() {
    let rule = ChgForOccupiedN::new(4);
    assert_eq!(rule.leave_n(), 4);
    assert_eq!(rule.apply(CellState::Empty, 0), CellState::Occupied);
    assert_eq!(rule.apply(CellState::Empty, 1), CellState::Empty);
    assert_eq!(rule.apply(CellState::Occupied, 3), CellState::Occupied);
    assert_eq!(rule.apply(CellState::Occupied, 4), CellState::Empty);
    assert_eq!(rule.apply(CellState::Occupied, 8), CellState::Empty);
    for n in 0..=8 {
        assert_eq!(rule.apply(CellState::Floor, n), CellState::Floor);
    }

    let rule = ChgForOccupiedN::new(5);
    assert_eq!(rule.apply(CellState::Occupied, 4), CellState::Occupied);
    assert_eq!(rule.apply(CellState::Occupied, 5), CellState::Empty);
}

#[test]
fn policy_thresholds() {
    assert_eq!(Policy::Adjacent.rule().leave_n(), 4);
    assert_eq!(Policy::Visible.rule().leave_n(), 5);
}

#[test]
fn adjacent_policy_steps() {
    let step_1 = Policy::Adjacent.step(&seat_map(STEP_0));
    assert_eq!(step_1, seat_map(STEP_1));
    assert_eq!(Policy::Adjacent.step(&step_1), seat_map(STEP_2));
}

#[test]
fn visible_policy_steps() {
    let step_1 = Policy::Visible.step(&seat_map(STEP_0));
    assert_eq!(step_1, seat_map(STEP_1));
    assert_eq!(Policy::Visible.step(&step_1), seat_map(VISIBLE_STEP_2));
}

#[test]
fn step_keeps_input_untouched() {
    let before = seat_map(STEP_1);
    let snapshot = before.clone();
    let _ = Policy::Adjacent.step(&before);
    assert_eq!(before, snapshot);
}
