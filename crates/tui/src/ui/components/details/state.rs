/// Details panel for one group; `selected` indexes its descending shade list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsState {
    pub group: String,
    pub selected: usize,
}

impl DetailsState {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            selected: 0,
        }
    }

    /// Moves the selection by `delta`, clamped to `0..len`.
    pub fn select_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = (self.selected as isize + delta).clamp(0, len as isize - 1);
        self.selected = next as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_clamps_at_both_ends() {
        let mut state = DetailsState::new("teal");
        state.select_by(-1, 10);
        assert_eq!(state.selected, 0);
        state.select_by(25, 10);
        assert_eq!(state.selected, 9);
        state.select_by(3, 0);
        assert_eq!(state.selected, 0);
    }
}
