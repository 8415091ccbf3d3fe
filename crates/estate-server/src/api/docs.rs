//! OpenAPI document and a Swagger UI page that renders it.

use axum::{response::Html, Json};
use estate_core::rules::{MAX_DIMENSION, MAX_HEIGHT, MIN_DIMENSION, MIN_HEIGHT};
use serde_json::{json, Value};

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Estate Survey API</title>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/swagger-ui/4.14.0/swagger-ui.css" />
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/swagger-ui/4.14.0/swagger-ui-bundle.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/swagger-ui/4.14.0/swagger-ui-standalone-preset.js"></script>
    <script>
      SwaggerUIBundle({
        url: "/swagger.json",
        dom_id: '#swagger-ui',
        deepLinking: true,
        presets: [SwaggerUIBundle.presets.apis, SwaggerUIBundle.SwaggerUIStandalonePreset],
        layout: "BaseLayout"
      });
    </script>
  </body>
</html>
"#;

pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

pub async fn openapi_json() -> Json<Value> {
    Json(openapi_document())
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } } }
    })
}

fn id_param() -> Value {
    json!({ "name": "id", "in": "path", "required": true, "schema": { "type": "string" } })
}

pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Estate Survey API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/estate": {
                "post": {
                    "summary": "Create an estate",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/CreateEstateRequest" } } }
                    },
                    "responses": {
                        "201": {
                            "description": "Created",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/CreatedResponse" } } }
                        },
                        "400": error_response("Invalid request")
                    }
                }
            },
            "/estate/{id}/tree": {
                "post": {
                    "summary": "Plant a tree on an estate",
                    "parameters": [id_param()],
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/CreateTreeRequest" } } }
                    },
                    "responses": {
                        "201": {
                            "description": "Created",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/CreatedResponse" } } }
                        },
                        "400": error_response("Invalid request"),
                        "404": error_response("Estate not found"),
                        "409": error_response("Cell already has a tree")
                    }
                }
            },
            "/estate/{id}/stats": {
                "get": {
                    "summary": "Tree height statistics",
                    "parameters": [id_param()],
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/StatsResponse" } } }
                        },
                        "404": error_response("Estate not found")
                    }
                }
            },
            "/estate/{id}/drone-plan": {
                "get": {
                    "summary": "Drone survey distance",
                    "parameters": [id_param()],
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/DronePlanResponse" } } }
                        },
                        "404": error_response("Estate not found")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "CreateEstateRequest": {
                    "type": "object",
                    "required": ["width", "length"],
                    "properties": {
                        "width": { "type": "integer", "minimum": MIN_DIMENSION, "maximum": MAX_DIMENSION },
                        "length": { "type": "integer", "minimum": MIN_DIMENSION, "maximum": MAX_DIMENSION }
                    }
                },
                "CreateTreeRequest": {
                    "type": "object",
                    "required": ["x", "y", "height"],
                    "properties": {
                        "x": { "type": "integer", "minimum": 0 },
                        "y": { "type": "integer", "minimum": 0 },
                        "height": { "type": "integer", "minimum": MIN_HEIGHT, "maximum": MAX_HEIGHT }
                    }
                },
                "CreatedResponse": {
                    "type": "object",
                    "required": ["id"],
                    "properties": { "id": { "type": "string" } }
                },
                "StatsResponse": {
                    "type": "object",
                    "required": ["count", "max", "min", "median"],
                    "properties": {
                        "count": { "type": "integer" },
                        "max": { "type": "integer" },
                        "min": { "type": "integer" },
                        "median": { "type": "number" }
                    }
                },
                "DronePlanResponse": {
                    "type": "object",
                    "required": ["distance"],
                    "properties": { "distance": { "type": "integer" } }
                },
                "ErrorResponse": {
                    "type": "object",
                    "required": ["message"],
                    "properties": { "message": { "type": "string" } }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_estate_route() {
        let doc = openapi_document();
        let paths = doc["paths"].as_object().unwrap();
        for path in [
            "/estate",
            "/estate/{id}/tree",
            "/estate/{id}/stats",
            "/estate/{id}/drone-plan",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
        assert_eq!(
            doc["components"]["schemas"]["CreateTreeRequest"]["properties"]["height"]["maximum"],
            30
        );
    }
}
