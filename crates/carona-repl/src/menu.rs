use crate::prompt::parse_number;

pub(crate) const MAIN_MENU: &str = "
Choose an option:
0 - Exit
1 - Log in
2 - Sign up
> ";

pub(crate) const USER_MENU: &str = "
Choose an option:
0 - Log out
1 - Create route
2 - View routes
3 - Messages
> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainMenuOption {
    Exit,
    Login,
    Signup,
}

impl MainMenuOption {
    pub(crate) fn parse(text: &str) -> Option<Self> {
        match parse_number::<u8>(text)? {
            0 => Some(Self::Exit),
            1 => Some(Self::Login),
            2 => Some(Self::Signup),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UserMenuOption {
    Logout,
    CreateRoute,
    ListRoutes,
    ViewMessages,
}

impl UserMenuOption {
    pub(crate) fn parse(text: &str) -> Option<Self> {
        match parse_number::<u8>(text)? {
            0 => Some(Self::Logout),
            1 => Some(Self::CreateRoute),
            2 => Some(Self::ListRoutes),
            3 => Some(Self::ViewMessages),
            _ => None,
        }
    }
}
