use mazewalk_core::Pos;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l1() {
        assert_eq!(manhattan(Pos::new(1, 1), Pos::new(3, 3)), 4);
        assert_eq!(manhattan(Pos::new(3, 0), Pos::new(0, 2)), 5);
        assert_eq!(manhattan(Pos::new(2, 2), Pos::new(2, 2)), 0);
    }
}
