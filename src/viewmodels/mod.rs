pub mod navigation_viewmodel;
pub mod session_viewmodel;
pub mod customer_viewmodel;

pub use navigation_viewmodel::NavigationViewModel;
pub use session_viewmodel::SessionViewModel;
pub use customer_viewmodel::CustomerViewModel;
