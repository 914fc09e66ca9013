use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewProducts,
    ViewCart,
    ViewAllOrders,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::ViewProducts,
        MenuChoice::ViewCart,
        MenuChoice::ViewAllOrders,
        MenuChoice::Exit,
    ];
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::ViewProducts => "View Products",
            MenuChoice::ViewCart => "View Shopping Cart",
            MenuChoice::ViewAllOrders => "View All Orders",
            MenuChoice::Exit => "Exit",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Checkout,
    Empty,
    Back,
}

impl CartAction {
    pub const ALL: [CartAction; 3] = [CartAction::Checkout, CartAction::Empty, CartAction::Back];
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CartAction::Checkout => "Check out",
            CartAction::Empty => "Empty the cart",
            CartAction::Back => "Back to menu",
        };
        f.write_str(label)
    }
}
