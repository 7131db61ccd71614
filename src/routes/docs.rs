use axum::Json;
use serde_json::{Value, json};

/// Machine-readable description of the API surface.
pub async fn openapi() -> Json<Value> {
    Json(json!({
        "openapi": "3.0.3",
        "info": {
            "title": "teamdir",
            "description": "Users and teams directory API",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/api/users": {
                "get": { "summary": "List users with their team", "responses": { "200": { "description": "OK" } } },
                "post": { "summary": "Create a user", "responses": {
                    "201": { "description": "Created" },
                    "400": { "description": "Validation errors or duplicate email" }
                } }
            },
            "/api/users/{id}": {
                "get": { "summary": "Get a user", "responses": { "200": { "description": "OK" }, "404": { "description": "User not found" } } },
                "put": { "summary": "Update a user (full payload)", "responses": {
                    "200": { "description": "Updated" },
                    "400": { "description": "Validation errors or duplicate email" },
                    "404": { "description": "User not found" }
                } },
                "delete": { "summary": "Delete a user", "responses": {
                    "200": { "description": "Deleted" },
                    "400": { "description": "Team must retain at least one member" },
                    "404": { "description": "User not found" }
                } }
            },
            "/api/teams": {
                "get": { "summary": "List teams with members", "responses": { "200": { "description": "OK" } } },
                "post": { "summary": "Create a team and assign members", "responses": {
                    "201": { "description": "Created" },
                    "400": { "description": "Validation errors, duplicate name, or unknown members" }
                } }
            },
            "/api/teams/{id}": {
                "get": { "summary": "Get a team", "responses": { "200": { "description": "OK" }, "404": { "description": "Team not found" } } },
                "put": { "summary": "Update a team and reassign members", "responses": {
                    "200": { "description": "Updated" },
                    "400": { "description": "Validation errors, duplicate name, or unknown members" },
                    "404": { "description": "Team not found" }
                } },
                "delete": { "summary": "Delete a team, clearing member references", "responses": {
                    "200": { "description": "Deleted" },
                    "404": { "description": "Team not found" }
                } }
            }
        },
        "components": {
            "schemas": {
                "User": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer" },
                        "name": { "type": "string", "maxLength": 50 },
                        "email": { "type": "string", "format": "email" },
                        "role": { "type": "string", "enum": ["admin", "member"] },
                        "created_at": { "type": "string", "format": "date" },
                        "team": { "$ref": "#/components/schemas/Team", "nullable": true }
                    }
                },
                "Team": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer" },
                        "name": { "type": "string", "maxLength": 100 },
                        "description": { "type": "string", "nullable": true },
                        "created_at": { "type": "string", "format": "date" }
                    }
                }
            }
        }
    }))
}
