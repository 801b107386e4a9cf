/// Which single map node is focused in the detail card.
///
/// The controller never checks that the id exists; a stale selection is the
/// renderer's problem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<String>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selecting the current node clears it; any other id replaces it.
    pub fn select(&mut self, id: Option<&str>) -> Option<String> {
        self.selected = match (id, self.selected.as_deref()) {
            (Some(id), Some(current)) if id == current => None,
            (Some(id), _) => Some(id.to_string()),
            (None, _) => None,
        };
        self.selected.clone()
    }

    pub fn current_selection(&self) -> Option<String> {
        self.selected.clone()
    }
}
