// Domain layer: the money and currency value objects.

pub mod currency;
pub mod money;
