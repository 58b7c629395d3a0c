//! Type-safe identifiers for every marketplace resource.
//!
//! Each id wraps the `u32` handed out by its resource actor and displays with
//! a resource prefix (`order_3`, `menu_item_12`), which is what shows up in
//! logs and in `FrameworkError::NotFound`.

use serde::{Deserialize, Serialize};

macro_rules! resource_ids {
    ($($name:ident => $prefix:literal),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Identifier of a `" $name "`, assigned by its actor."]
                #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
                pub struct [<$name Id>](pub u32);

                impl From<u32> for [<$name Id>] {
                    fn from(id: u32) -> Self {
                        Self(id)
                    }
                }

                impl std::fmt::Display for [<$name Id>] {
                    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(f, concat!($prefix, "_{}"), self.0)
                    }
                }
            )*
        }
    };
}

resource_ids! {
    User => "user",
    Restaurant => "restaurant",
    MenuItem => "menu_item",
    Order => "order",
    Review => "review",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display_with_resource_prefix() {
        assert_eq!(OrderId(7).to_string(), "order_7");
        assert_eq!(MenuItemId::from(12).to_string(), "menu_item_12");
    }

    #[test]
    fn test_ids_sort_in_creation_order() {
        let mut ids = vec![UserId(3), UserId(1), UserId(2)];
        ids.sort();
        assert_eq!(ids, vec![UserId(1), UserId(2), UserId(3)]);
    }
}
