/// What the progress surface shows. Setting the same values twice is a no-op
/// beyond re-setting them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressState {
    pub percentage: u8,
    pub label: String,
    pub visible: bool,
    /// Set by `show`; the surface plays its entrance transition when true.
    pub entering: bool,
}

impl ProgressState {
    pub fn show(&mut self) {
        self.visible = true;
        self.entering = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.entering = false;
    }

    pub fn update(&mut self, percentage: u8, label: impl Into<String>) {
        self.percentage = percentage.min(100);
        self.label = label.into();
    }
}
