use serde::{Deserialize, Serialize};

/// The view currently on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    SignUp,
    Login,
}
