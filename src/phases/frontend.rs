//! React components and custom hooks.

use crate::message::{CommitMessage, CommitType};

pub(super) fn component_name(index: u32) -> String {
    format!("Component{index:03}")
}

pub(super) fn hook_name(index: u32) -> String {
    format!("use{index:03}")
}

pub(super) fn component(index: u32) -> (String, CommitMessage) {
    let name = component_name(index);
    let class_name = name.to_lowercase();
    let content = format!(
        r#"import React, {{ useState, useEffect }} from 'react';
import PropTypes from 'prop-types';

/**
 * {name} Component
 * @param {{Object}} props - Component properties
 */
const {name} = ({{ data, onAction }}) => {{
    const [state, setState] = useState(null);
    
    useEffect(() => {{
        // Component initialization
        setState(data);
    }}, [data]);
    
    const handleClick = () => {{
        if (onAction) {{
            onAction(state);
        }}
    }};
    
    return (
        <div className="{class_name}">
            <h2>{name}</h2>
            <button onClick={{handleClick}}>Action</button>
        </div>
    );
}};

{name}.propTypes = {{
    data: PropTypes.object,
    onAction: PropTypes.func
}};

export default {name};
"#
    );
    let message = CommitMessage::new(
        CommitType::Feat,
        "frontend",
        format!("add {name} component with hooks"),
    );
    (content, message)
}

pub(super) fn hook(index: u32) -> (String, CommitMessage) {
    let name = hook_name(index);
    let content = format!(
        r#"import {{ useState, useEffect, useCallback }} from 'react';

/**
 * Custom hook {index}
 * @param {{*}} initialValue - Initial value
 * @returns {{Object}} Hook state and methods
 */
export default function {name}(initialValue = null) {{
    const [value, setValue] = useState(initialValue);
    const [loading, setLoading] = useState(false);
    const [error, setError] = useState(null);
    
    const update = useCallback((newValue) => {{
        setLoading(true);
        try {{
            setValue(newValue);
            setError(null);
        }} catch (err) {{
            setError(err);
        }} finally {{
            setLoading(false);
        }}
    }}, []);
    
    return {{ value, loading, error, update }};
}}
"#
    );
    let message = CommitMessage::new(
        CommitType::Feat,
        "hooks",
        format!("add {name} custom React hook"),
    );
    (content, message)
}
