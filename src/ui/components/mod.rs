//! Reusable UI components

pub mod header;
pub mod help_panel;
pub mod login_form;
pub mod manifest_dialog;
pub mod repository_detail;
pub mod repository_list;
pub mod status_bar;
pub mod toast;

pub use header::Header;
pub use help_panel::HelpPanel;
pub use login_form::LoginFormView;
pub use manifest_dialog::ManifestDialog;
pub use repository_detail::RepositoryDetail;
pub use repository_list::RepositoryList;
pub use status_bar::StatusBar;
pub use toast::ToastView;
