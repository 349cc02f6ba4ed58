use gridsieve_core::{Descriptor, House};

use super::{BoxedStrategy, Strategy};
use crate::SolverError;

const NAME: &str = "locked candidates";

/// Removes candidates locked into a box/line crossing.
///
/// For every value, box, and line crossing that box:
///
/// - **Pointing**: if all of the box's candidates for the value lie on the
///   line, the value cannot appear on the line outside the box.
/// - **Claiming**: if all of the line's candidates for the value lie in the
///   box, the value cannot appear in the box off the line.
///
/// Both directions clear the same region (the symmetric difference of box
/// and line), so a single elimination covers whichever case matched. A
/// crossing whose box and line candidates already coincide admits no
/// deduction and is skipped rather than reported as progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedCandidates;

impl LockedCandidates {
    /// Creates a new `LockedCandidates` strategy.
    #[must_use]
    pub const fn new() -> Self {
        LockedCandidates
    }

    fn reduce_crossing(space: &mut Descriptor, value: u8, box_index: usize, line: House) -> bool {
        let box_mask = space.box_mask(box_index);
        let line_mask = space.house_mask(line);
        let plane = space.value_positions(value);

        let in_box = plane & box_mask;
        let in_line = plane & line_mask;
        if in_box == in_line {
            return false;
        }

        let crossing = &in_box & &in_line;
        if crossing.is_empty() {
            return false;
        }

        if in_box == crossing || in_line == crossing {
            let outside = box_mask ^ line_mask;
            return space.eliminate(value, &outside);
        }

        false
    }
}

impl Strategy for LockedCandidates {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, space: &mut Descriptor) -> Result<bool, SolverError> {
        let layout = space.layout();
        let mut changed = false;

        for value in 1..=layout.max_value() {
            for box_index in 0..layout.side() {
                let (origin_x, origin_y) = layout.cell_coords(layout.box_origin(box_index));
                for dx in 0..layout.box_width() {
                    let line = House::Column { x: origin_x + dx };
                    changed |= Self::reduce_crossing(space, value, box_index, line);
                }
                for dy in 0..layout.box_height() {
                    let line = House::Row { y: origin_y + dy };
                    changed |= Self::reduce_crossing(space, value, box_index, line);
                }
            }
        }

        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use gridsieve_core::{Descriptor, Layout};

    use super::*;
    use crate::testing::StrategyTester;

    /// A space where value 5's candidates in box 0 all lie on row 0.
    fn pointing_space() -> Descriptor {
        let mut space = Descriptor::new(Layout::CLASSIC);
        let lower_box_rows = space.box_mask(0) & space.row_mask(1);
        space.eliminate(5, &lower_box_rows);
        let lower_box_rows = space.box_mask(0) & space.row_mask(2);
        space.eliminate(5, &lower_box_rows);
        space
    }

    #[test]
    fn test_pointing_clears_rest_of_line() {
        let layout = Layout::CLASSIC;
        StrategyTester::new(pointing_space())
            .apply_once(&LockedCandidates::new())
            .assert_progress()
            // 5 is gone from row 0 outside box 0...
            .assert_removed(layout.cell_at(3, 0), 5)
            .assert_removed(layout.cell_at(8, 0), 5)
            // ...but stays inside the box and in unrelated rows.
            .assert_no_change(layout.cell_at(0, 0))
            .assert_no_change(layout.cell_at(3, 1));
    }

    #[test]
    fn test_pointing_pass_is_idempotent() {
        StrategyTester::new(pointing_space())
            .apply_once(&LockedCandidates::new())
            .assert_progress()
            .apply_once(&LockedCandidates::new())
            .assert_no_progress();
    }

    #[test]
    fn test_claiming_clears_rest_of_box() {
        // Value 7's candidates in row 0 confined to box 0.
        let mut space = Descriptor::new(Layout::CLASSIC);
        let layout = space.layout();
        let mut outside_box = space.row_mask(0).clone();
        outside_box.subtract(space.box_mask(0));
        space.eliminate(7, &outside_box);

        StrategyTester::new(space)
            .apply_once(&LockedCandidates::new())
            .assert_progress()
            // 7 is gone from box 0 off row 0.
            .assert_removed(layout.cell_at(0, 1), 7)
            .assert_removed(layout.cell_at(2, 2), 7)
            // Row 0 inside the box keeps it.
            .assert_no_change(layout.cell_at(0, 0));
    }

    #[test]
    fn test_no_progress_on_unconstrained_space() {
        StrategyTester::new(Descriptor::new(Layout::CLASSIC))
            .apply_once(&LockedCandidates::new())
            .assert_no_progress();
    }
}
