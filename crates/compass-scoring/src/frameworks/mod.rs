pub mod career;
pub mod life;
pub mod personal;
