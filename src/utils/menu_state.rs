/// Open/closed state of the mobile navigation overlay. Not persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    HamburgerPressed,
    ClosePressed,
    LinkActivated,
}

impl MenuState {
    pub fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (Self::Closed, MenuEvent::HamburgerPressed) => Self::Open,
            (Self::Open, MenuEvent::ClosePressed | MenuEvent::LinkActivated) => Self::Closed,
            (state, _) => state,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}
