//! Documentation pages.
//!
//! Each page picks its topic from [`TOPICS`] by `index % TOPICS.len()`, so the
//! topics cycle every twenty pages.

use crate::message::{CommitMessage, CommitType};

/// Topics cycled through by the documentation phase, in order.
pub const TOPICS: [&str; 20] = [
    "Installation",
    "Configuration",
    "Deployment",
    "Security",
    "Performance",
    "Testing",
    "Monitoring",
    "Debugging",
    "API Reference",
    "Architecture",
    "Database",
    "Caching",
    "Authentication",
    "Authorization",
    "Webhooks",
    "Integration",
    "Migration",
    "Backup",
    "Recovery",
    "Scaling",
];

/// The topic covered by documentation page `index`.
pub fn topic_for(index: u32) -> &'static str {
    TOPICS[index as usize % TOPICS.len()]
}

pub(super) fn page(index: u32) -> (String, CommitMessage) {
    let topic = topic_for(index);
    let lower = topic.to_lowercase();
    let content = format!(
        r#"# {topic} Guide - Part {index}

## Overview

This section covers {lower} concepts and best practices.

## Table of Contents

- [Introduction](#introduction)
- [Implementation](#implementation)
- [Best Practices](#best-practices)
- [Examples](#examples)

## Introduction

Detailed information about {lower}.

## Implementation

Step-by-step implementation guide.

## Best Practices

1. Follow industry standards
2. Implement proper error handling
3. Use appropriate logging
4. Test thoroughly

## Examples

```javascript
// Example code will be added here
```

## References

- Documentation reference {index}
"#
    );
    let message =
        CommitMessage::unscoped(CommitType::Docs, format!("add {topic} documentation part {index}"));
    (content, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_wraps_around() {
        assert_eq!(topic_for(0), "Installation");
        assert_eq!(topic_for(TOPICS.len() as u32), "Installation");
        assert_eq!(topic_for(1), "Configuration");
        assert_eq!(topic_for(19), "Scaling");
        assert_eq!(topic_for(21), "Configuration");
    }

    #[test]
    fn test_page_heading_and_lowercase_topic() {
        let (content, _) = page(8);
        assert!(content.starts_with("# API Reference Guide - Part 8\n"));
        assert!(content.contains("This section covers api reference concepts"));
        assert!(content.contains("Detailed information about api reference."));
        assert!(content.contains("- Documentation reference 8\n"));
    }

    #[test]
    fn test_page_message_has_no_scope() {
        let (_, message) = page(3);
        assert!(message.scope.is_empty());
        assert_eq!(message.to_string(), "docs: add Security documentation part 3");
    }
}
