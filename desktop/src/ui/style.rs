use stylist::{css, Style};

pub fn container_style() -> Style {
    Style::new(css!(r#"
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 10px;
        left: 50%;
        min-width: 40%;
        padding-top: 1rem;
        position: absolute;
        transform: translate(-50%, 0);
        text-align: center;
    "#)).expect("Error creating style")
}

pub fn header_style() -> Style {
    Style::new(css!(r#"
        position: relative;
        display: block;
        font-size: 5vh;
        font-weight: bold;
        margin: 1.5vw;
        text-align: center;
        user-select: none;
    "#)).expect("Error creating style")
}

pub fn paragraph_style() -> Style {
    Style::new(css!(r#"
        margin-bottom: 1em;
        margin-top: 1em;
    "#)).expect("Error creating style")
}

pub fn icon_style() -> Style {
    Style::new(css!(r#"
        position: relative;
        vertical-align: middle;
        margin-left: 0.5em;
    "#)).expect("Error creating style")
}

pub fn error_style() -> Style {
    Style::new(css!(r#"
        color: #d33;
        font-size: 0.85em;
        margin-top: -0.5em;
        margin-bottom: 0.75em;
    "#)).expect("Error creating style")
}

pub fn preview_style() -> Style {
    Style::new(css!(r#"
        max-width: 50%;
        max-height: 40vh;
        border-radius: 8px;
        margin-top: 1em;
    "#)).expect("Error creating style")
}
