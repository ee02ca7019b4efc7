//! Express routes, middleware and data models.

use crate::message::{CommitMessage, CommitType};

/// HTTP methods cycled through by the API route phase, in order.
pub const METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "PATCH"];

/// The HTTP method served by route `index`.
pub fn method_for(index: u32) -> &'static str {
    METHODS[index as usize % METHODS.len()]
}

pub(super) fn model_name(index: u32) -> String {
    format!("Model{index:03}")
}

pub(super) fn api_route(index: u32) -> (String, CommitMessage) {
    let name = format!("route_{index:03}");
    let method = method_for(index);
    let handler = method.to_lowercase();
    let content = format!(
        r#"const express = require('express');
const router = express.Router();

/**
 * @route   {method} /api/{name}
 * @desc    API endpoint {index}
 * @access  Public
 */
router.{handler}('/', async (req, res) => {{
    try {{
        const data = {{ 
            message: '{name} endpoint',
            timestamp: new Date().toISOString(),
            method: '{method}'
        }};
        
        res.status(200).json(data);
    }} catch (error) {{
        console.error('Error in {name}:', error);
        res.status(500).json({{ 
            error: error.message,
            endpoint: '{name}'
        }});
    }}
}});

module.exports = router;
"#
    );
    let message = CommitMessage::new(
        CommitType::Feat,
        "api",
        format!("add {method} {name} endpoint"),
    );
    (content, message)
}

pub(super) fn middleware(index: u32) -> (String, CommitMessage) {
    let name = format!("middleware_{index:03}");
    let content = format!(
        r#"/**
 * Middleware {index}
 * @param {{Object}} req - Express request object
 * @param {{Object}} res - Express response object
 * @param {{Function}} next - Next middleware function
 */
module.exports = (req, res, next) => {{
    // Middleware logic
    console.log('{name} middleware executed');
    
    req.middleware{index} = {{
        processed: true,
        timestamp: Date.now()
    }};
    
    next();
}};
"#
    );
    let message = CommitMessage::new(
        CommitType::Feat,
        "middleware",
        format!("add {name} middleware"),
    );
    (content, message)
}

pub(super) fn model(index: u32) -> (String, CommitMessage) {
    let name = model_name(index);
    let content = format!(
        r#"/**
 * {name} data model
 */
class {name} {{
    constructor(data = {{}}) {{
        this.id = data.id || null;
        this.data = data;
        this.createdAt = new Date();
        this.updatedAt = new Date();
    }}
    
    validate() {{
        return this.id !== null;
    }}
    
    toJSON() {{
        return {{
            id: this.id,
            data: this.data,
            createdAt: this.createdAt,
            updatedAt: this.updatedAt
        }};
    }}
}}

module.exports = {name};
"#
    );
    let message = CommitMessage::new(CommitType::Feat, "models", format!("add {name} data model"));
    (content, message)
}
