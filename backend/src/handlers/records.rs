//! Generic delete and edit endpoints, dispatched on a `type` selector

use axum::{
    extract::{Query, State},
    response::Redirect,
    Form,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use shared::{parse_optional_id, RecordKind};

use super::views;
use crate::error::{AppError, AppResult};
use crate::services::inventory::{EditLocationInput, EditProductInput, InventoryService};
use crate::AppState;

/// Query string of `/delete` and `/edit`
///
/// The identifier may arrive as `id` or under the kind-specific
/// `prod_id`/`loc_id` names.
#[derive(Debug, Default, Deserialize)]
pub struct RecordQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub prod_id: Option<String>,
    pub loc_id: Option<String>,
}

impl RecordQuery {
    fn record_id(&self, kind: RecordKind) -> Option<&str> {
        let specific = match kind {
            RecordKind::Product => &self.prod_id,
            RecordKind::Location => &self.loc_id,
        };
        self.id.as_deref().or(specific.as_deref())
    }
}

/// Fields posted by either edit form
///
/// `loc_id` is the location reference on the product form but the record
/// identifier on the location form, so the fields stay separate here and
/// are resolved once the record kind is known.
#[derive(Debug, Default, Deserialize)]
pub struct EditForm {
    pub id: Option<String>,
    pub prod_id: Option<String>,
    pub loc_id: Option<String>,
    pub name: Option<String>,
    pub prod_name: Option<String>,
    pub loc_name: Option<String>,
    #[serde(alias = "prod_quantity")]
    pub quantity: Option<String>,
    pub location_id: Option<String>,
}

impl EditForm {
    fn into_product(self, query: &RecordQuery) -> EditProductInput {
        EditProductInput {
            id: self
                .id
                .or(self.prod_id)
                .or_else(|| query.record_id(RecordKind::Product).map(str::to_string)),
            name: self.name.or(self.prod_name),
            quantity: self.quantity,
            location_id: self.location_id.or(self.loc_id),
        }
    }

    fn into_location(self, query: &RecordQuery) -> EditLocationInput {
        EditLocationInput {
            id: self
                .id
                .or(self.loc_id)
                .or_else(|| query.record_id(RecordKind::Location).map(str::to_string)),
            name: self.name.or(self.loc_name),
        }
    }
}

/// Delete a product or a location
pub async fn delete_record(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<RecordQuery>, AppError>,
) -> AppResult<Redirect> {
    let Some(kind) = RecordKind::parse(query.kind.as_deref()) else {
        return Ok(Redirect::to(views::SUMMARY));
    };
    let id = parse_optional_id(query.record_id(kind))
        .map_err(|msg| AppError::validation("id", msg))?;
    tracing::debug!(record = %kind, id = ?id, "Delete requested");

    let service = InventoryService::new(state.db);
    match kind {
        RecordKind::Product => {
            if let Some(product_id) = id {
                service.delete_product(product_id).await?;
            }
            Ok(Redirect::to(views::STOCK))
        }
        RecordKind::Location => {
            if let Some(location_id) = id {
                service.delete_location(location_id).await?;
            }
            Ok(Redirect::to(views::LOCATIONS))
        }
    }
}

/// Edit a product or rename a location
pub async fn edit_record(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<RecordQuery>, AppError>,
    WithRejection(Form(form), _): WithRejection<Form<EditForm>, AppError>,
) -> AppResult<Redirect> {
    let Some(kind) = RecordKind::parse(query.kind.as_deref()) else {
        return Ok(Redirect::to(views::SUMMARY));
    };

    let service = InventoryService::new(state.db);
    match kind {
        RecordKind::Product => {
            service.edit_product(form.into_product(&query)).await?;
            Ok(Redirect::to(views::STOCK))
        }
        RecordKind::Location => {
            service.edit_location(form.into_location(&query)).await?;
            Ok(Redirect::to(views::LOCATIONS))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loc_id_depends_on_record_kind() {
        let form = || EditForm {
            prod_id: Some("4".into()),
            loc_id: Some("2".into()),
            prod_name: Some("Widget".into()),
            ..Default::default()
        };
        let query = RecordQuery::default();

        let product = form().into_product(&query);
        assert_eq!(product.id.as_deref(), Some("4"));
        assert_eq!(product.name.as_deref(), Some("Widget"));
        assert_eq!(product.location_id.as_deref(), Some("2"));

        let location = form().into_location(&query);
        assert_eq!(location.id.as_deref(), Some("2"));
        assert_eq!(location.name, None);
    }

    #[test]
    fn test_query_supplies_missing_id() {
        let query = RecordQuery {
            kind: Some("location".into()),
            loc_id: Some("7".into()),
            ..Default::default()
        };
        let form = EditForm {
            loc_name: Some("Aisle 9".into()),
            ..Default::default()
        };

        let location = form.into_location(&query);
        assert_eq!(location.id.as_deref(), Some("7"));
        assert_eq!(location.name.as_deref(), Some("Aisle 9"));
    }
}
