// src/types/enums.rs
#[derive(Clone, Copy, Debug)]
pub enum View {
    Landing,
    GoLive,
    Activity,
}
