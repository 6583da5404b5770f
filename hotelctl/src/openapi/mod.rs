//! OpenAPI documentation for the hotel API.

use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::api;

/// Bearer session token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "BearerAuth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "Session token issued at sign-in. Include it in the `Authorization` header:\n\n\
                            ```\nAuthorization: Bearer YOUR_SESSION_TOKEN\n```",
                        ))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(
        api::handlers::hotels::list_hotels,
        api::handlers::hotels::get_hotel,
    ),
    components(
        schemas(
            api::models::hotels::HotelResponse,
            api::models::hotels::HotelWithRoomsResponse,
            api::models::hotels::RoomResponse,
        )
    ),
    tags(
        (name = "hotels", description = "Hotels and rooms available to ticket holders.

Access requires a paid, in-person ticket whose type includes accommodation."),
    ),
    info(
        title = "Hotel API",
        description = "Hotel and room availability for event ticket holders.",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_hotel_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/hotels"));
        assert!(doc.paths.paths.contains_key("/hotels/{hotel_id}"));

        let components = doc.components.expect("components should be present");
        assert!(components.security_schemes.contains_key("BearerAuth"));
        assert!(components.schemas.contains_key("HotelWithRoomsResponse"));
    }
}
