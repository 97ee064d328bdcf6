//! Collection schema for the wilayah documents.

use wilayah_shared::{CollectionSchema, Field, FieldType};

/// The default name of the collection.
pub const DEFAULT_COLLECTION_NAME: &str = "villages";

/// Field the engine sorts on when a query doesn't say otherwise.
pub const DEFAULT_SORTING_FIELD: &str = "created_at";

/// String fields of the schema, in declaration order.
const STRING_FIELDS: [&str; 13] = [
    "id",
    "name",
    "village_id",
    "village_name",
    "district_id",
    "district_name",
    "city_id",
    "city_name",
    "province_id",
    "province_name",
    "postal_id",
    "postal",
    "full_name",
];

/// Build the schema for the wilayah collection.
///
/// Thirteen string fields plus `created_at` as an `int64`, which is also the
/// default sorting field. `updated_at` and `deleted_at` are stored on the
/// documents but not indexed.
pub fn wilayah_schema(name: &str) -> CollectionSchema {
    let mut fields: Vec<Field> = STRING_FIELDS
        .iter()
        .map(|field| Field::new(*field, FieldType::String))
        .collect();
    fields.push(Field::new(DEFAULT_SORTING_FIELD, FieldType::Int64));

    CollectionSchema {
        name: name.to_string(),
        fields,
        default_sorting_field: Some(DEFAULT_SORTING_FIELD.to_string()),
    }
}
