/// Accumulated state threaded through the steps of a wizard.
pub trait ParamBag: Default {
    /// What a step hands back on completion; merged shallowly into the bag.
    type Update;

    fn merge(&mut self, update: Self::Update);
}

/// Step index plus parameter bag. Knows nothing about what the steps are.
#[derive(Debug, Clone, Default)]
pub struct Wizard<P> {
    step_index: usize,
    params: P,
    scroll_to_top: bool,
}

impl<P: ParamBag> Wizard<P> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step_index: 0,
            params: P::default(),
            scroll_to_top: false,
        }
    }

    #[must_use]
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    #[must_use]
    pub fn params(&self) -> &P {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut P {
        &mut self.params
    }

    /// Moves to `target` when given, otherwise to the next step, and merges `update` either way.
    pub fn advance(&mut self, update: P::Update, target: Option<usize>) {
        self.step_index = match target {
            Some(t) => t,
            None => self.step_index.saturating_add(1),
        };
        self.params.merge(update);
        self.scroll_to_top = true;
    }

    /// The step at the current index, or `None` (logged) when the index is out of range.
    pub fn current<'s, S>(&self, steps: &'s [S]) -> Option<&'s S> {
        let step = steps.get(self.step_index);
        if step.is_none() {
            tracing::error!(step = self.step_index, steps = steps.len(), "Unknown step");
        }
        step
    }

    /// True once after each transition; the view turns it into a scroll to the top of the page.
    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }
}
