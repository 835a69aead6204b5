// @generated by assertify 0.1.0. Do not edit by hand.
// Regenerate from the schema instead.

#[allow(unused_imports)]
use std::sync::{Arc, LazyLock};

#[allow(unused_imports)]
use serde_json::Value;

#[allow(unused_imports)]
use assertify::compiler::{Check, ItemPlan, ObjectPlan, PropertyPlan, ValueKind};
#[allow(unused_imports)]
use assertify::runtime::{Outcome, ValidateOptions, ValidationFailure};
#[allow(unused_imports)]
use assertify::schema::Transform;

static USER_PLAN: LazyLock<Arc<ObjectPlan>> = LazyLock::new(|| {
    Arc::new(ObjectPlan::new(
        "User",
        vec![
            PropertyPlan::new(
                "id",
                true,
                vec![],
                vec![Check::Kind(ValueKind::Number), Check::Integer],
            ),
            PropertyPlan::new(
                "username",
                true,
                vec![Transform::Trim, Transform::Lowercase],
                vec![Check::Kind(ValueKind::String), Check::MinLength(3)],
            ),
            PropertyPlan::new(
                "email",
                false,
                vec![],
                vec![Check::Kind(ValueKind::String)],
            ),
            PropertyPlan::new(
                "status",
                true,
                vec![],
                vec![Check::Kind(ValueKind::String)],
            ),
            PropertyPlan::new(
                "userClass",
                true,
                vec![],
                vec![Check::Kind(ValueKind::String), Check::Prefix("class-".to_string())],
            ),
        ],
    ))
});

/// Validates a `User` record.
///
/// Assertion mode returns the transformed record or the first failure.
/// Verbose mode returns a report of every failing property.
pub fn validate_user(data: &Value, options: &ValidateOptions) -> Result<Outcome, ValidationFailure> {
    assertify::runtime::validate(&USER_PLAN, data, options)
}

static PRODUCT_PLAN: LazyLock<Arc<ObjectPlan>> = LazyLock::new(|| {
    Arc::new(ObjectPlan::new(
        "Product",
        vec![
            PropertyPlan::new(
                "productId",
                true,
                vec![],
                vec![Check::Kind(ValueKind::String)],
            ),
            PropertyPlan::new(
                "price",
                true,
                vec![],
                vec![Check::Kind(ValueKind::Number)],
            ),
            PropertyPlan::new(
                "seller",
                true,
                vec![],
                vec![
                    Check::Kind(ValueKind::Object),
                    Check::Fields(Arc::clone(&*SELLER_PLAN)),
                ],
            ),
            PropertyPlan::new(
                "tags",
                true,
                vec![],
                vec![
                    Check::Kind(ValueKind::Array),
                    Check::MinLength(1),
                    Check::Items(Box::new(ItemPlan::new(vec![Check::Kind(ValueKind::String), Check::MinLength(3)]))),
                ],
            ),
            PropertyPlan::new(
                "dimensions",
                false,
                vec![],
                vec![
                    Check::Kind(ValueKind::Object),
                    Check::Fields(Arc::new(ObjectPlan::new(
                        "Product.dimensions",
                        vec![
                            PropertyPlan::new(
                                "width",
                                true,
                                vec![],
                                vec![Check::Kind(ValueKind::Number)],
                            ),
                            PropertyPlan::new(
                                "height",
                                true,
                                vec![],
                                vec![Check::Kind(ValueKind::Number)],
                            ),
                        ],
                    ))),
                ],
            ),
        ],
    ))
});

/// Validates a `Product` record.
///
/// Assertion mode returns the transformed record or the first failure.
/// Verbose mode returns a report of every failing property.
pub fn validate_product(data: &Value, options: &ValidateOptions) -> Result<Outcome, ValidationFailure> {
    assertify::runtime::validate(&PRODUCT_PLAN, data, options)
}

static SELLER_PLAN: LazyLock<Arc<ObjectPlan>> = LazyLock::new(|| {
    Arc::new(ObjectPlan::new(
        "Seller",
        vec![
            PropertyPlan::new(
                "sellerId",
                true,
                vec![Transform::Trim, Transform::ToInteger],
                vec![Check::Kind(ValueKind::Number), Check::Integer],
            ),
            PropertyPlan::new(
                "companyName",
                true,
                vec![],
                vec![Check::Kind(ValueKind::String)],
            ),
        ],
    ))
});

/// Validates a `Seller` record.
///
/// Assertion mode returns the transformed record or the first failure.
/// Verbose mode returns a report of every failing property.
pub fn validate_seller(data: &Value, options: &ValidateOptions) -> Result<Outcome, ValidationFailure> {
    assertify::runtime::validate(&SELLER_PLAN, data, options)
}
