use ready_core::inputs::{ItemUpdate, ItemUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct UpdateParams {
    pub name: Option<String>,
    pub category: Option<String>,
    pub clear_category: bool,
    pub quantity: Option<i64>,
    pub min_quantity: Option<i64>,
}

impl UpdateParams {
    fn into_update(self) -> ItemUpdate {
        let mut builder = ItemUpdateBuilder::new();
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if self.clear_category {
            builder = builder.category(None);
        } else if let Some(category) = self.category {
            builder = builder.category(Some(category));
        }
        if let Some(quantity) = self.quantity {
            builder = builder.quantity(quantity);
        }
        if let Some(min_quantity) = self.min_quantity {
            builder = builder.min_quantity(min_quantity);
        }
        builder.build()
    }
}

pub async fn run(
    id: i64,
    params: UpdateParams,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let item = ctx.service.update_item(id, &params.into_update()).await?;
    output(&item, flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::UpdateParams;

    fn params() -> UpdateParams {
        UpdateParams {
            name: None,
            category: None,
            clear_category: false,
            quantity: None,
            min_quantity: None,
        }
    }

    #[test]
    fn no_flags_builds_an_empty_update() {
        assert!(params().into_update().is_empty());
    }

    #[test]
    fn clear_category_sets_null() {
        let update = UpdateParams {
            clear_category: true,
            ..params()
        }
        .into_update();
        assert_eq!(update.category, Some(None));
    }

    #[test]
    fn fields_pass_through() {
        let update = UpdateParams {
            name: Some("Nitrile gloves".into()),
            category: Some("PPE".into()),
            quantity: Some(4),
            ..params()
        }
        .into_update();
        assert_eq!(update.name.as_deref(), Some("Nitrile gloves"));
        assert_eq!(update.category, Some(Some("PPE".into())));
        assert_eq!(update.quantity, Some(4));
        assert_eq!(update.min_quantity, None);
    }
}
