// @generated by `advent scaffold`. Edits are overwritten.

use crate::{Error, Registry};

pub fn register_all(_registry: &mut Registry) -> Result<(), Error> {
    Ok(())
}
