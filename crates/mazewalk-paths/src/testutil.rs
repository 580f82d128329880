//! Fixtures and an independent distance oracle for solver tests.

use std::collections::VecDeque;

use mazewalk_core::{DIRECTIONS, Event, Maze, Pos, Puzzle, Stepper};

/// 5x5, walled border, open interior; start (1,1), end (3,3).
pub const OPEN_5X5: &str = "\
#####
#S..#
#...#
#..E#
#####";

/// A winding corridor with a dead-end branch.
pub const CORRIDOR: &str = "\
#########
#S#.....#
#.#.###.#
#.#...#.#
#.###.#.#
#...#.#E#
###.....#
#########";

/// The end sits in a sealed one-cell pocket.
pub const POCKET: &str = "\
#######
#S...##
#...#E#
#....##
#######";

pub fn puzzle(s: &str) -> Puzzle {
    Puzzle::parse(s).unwrap()
}

/// Fewest positions on any route from `start` to `end`, endpoints included.
pub fn shortest_len(maze: &Maze, start: Pos, end: Pos) -> Option<usize> {
    let mut dist = vec![usize::MAX; maze.len()];
    let mut queue = VecDeque::new();
    dist[maze.index(start)?] = 1;
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        let d = dist[maze.index(p)?];
        if p == end {
            return Some(d);
        }
        for dir in DIRECTIONS {
            let n = p.step(dir);
            if let Some(ni) = maze.index(n) {
                if maze.is_open(n) && dist[ni] == usize::MAX {
                    dist[ni] = d + 1;
                    queue.push_back(n);
                }
            }
        }
    }
    None
}

/// Pull every event out of a solver.
pub fn drain<S: Stepper>(s: S) -> Vec<Event> {
    s.solve().collect()
}

/// Assert the event sequence ends in exactly one terminal event.
pub fn assert_single_terminal(events: &[Event]) {
    let terminals = events.iter().filter(|e| e.is_terminal()).count();
    assert_eq!(terminals, 1, "events: {events:?}");
    assert!(events.last().is_some_and(Event::is_terminal));
}

/// The solution path, if the stream ended in one.
pub fn solution(events: &[Event]) -> Option<&[Pos]> {
    match events.last()? {
        Event::Solution { path } => Some(path),
        _ => None,
    }
}

/// Positions of all `Visit` events, in order.
pub fn visits(events: &[Event]) -> Vec<Pos> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Visit { pos, .. } => Some(*pos),
            _ => None,
        })
        .collect()
}
