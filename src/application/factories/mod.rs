mod composer_factory;
mod presenter_factory;

pub use composer_factory::ComposerFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
