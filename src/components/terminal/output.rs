use leptos::prelude::*;
use termfolio_core::TranscriptEntry;
use termfolio_core::models::{Color, ListFormat, OutputLine, OutputLineData, Project, TextStyle};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Get CSS class for a TextStyle
fn style_class(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Directory => css::textBlue,
        TextStyle::File => css::textFg,
        TextStyle::Hidden => css::textDim,
    }
}

/// Inline color style for palette colors chosen per project or tag.
fn color_style(color: Color) -> String {
    format!("color: {}", color.hex())
}

/// A submitted command: its prompt line, then its output.
#[component]
pub fn Entry(entry: TranscriptEntry) -> impl IntoView {
    let prompt = entry.prompt();
    view! {
        <div class=css::entry>
            <div class=css::command>
                <span class=css::textGreen>{prompt}"$ "</span>
                <span class=css::textFg>{entry.command}</span>
            </div>
            {entry
                .output
                .into_iter()
                .map(|line| view! { <Output line=line /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line.data {
        OutputLineData::Text(text) => {
            view! {
                <div class=format!("{} {}", css::line, css::textFg)>{text}</div>
            }.into_any()
        }
        OutputLineData::Error(text) => {
            view! {
                <div class=format!("{} {}", css::line, css::textRed)>{text}</div>
            }.into_any()
        }
        OutputLineData::Info(text) => {
            view! {
                <div class=format!("{} {}", css::line, css::textYellow)>{text}</div>
            }.into_any()
        }
        OutputLineData::Labeled { label, text } => {
            view! {
                <div class=css::line>
                    <span class=css::textMauve>{label}</span>
                    " "
                    <span class=css::textFg>{text}</span>
                </div>
            }.into_any()
        }
        OutputLineData::ListEntry { name, style, format } => {
            let is_dir = style == TextStyle::Directory;
            let name_class = if is_dir {
                format!("{} {}", style_class(style), css::fontBold)
            } else {
                style_class(style).to_string()
            };
            let suffix = if is_dir { "/" } else { "" };
            let details = match format {
                ListFormat::Short => None,
                ListFormat::Long { permissions, size } => {
                    Some(format!("{} {:>6} ", permissions, size))
                }
            };
            view! {
                <div class=css::listEntry>
                    <span class=css::textDim>{details}</span>
                    <span class=name_class>{format!("{}{}", name, suffix)}</span>
                </div>
            }.into_any()
        }
        OutputLineData::ProjectCard(project) => {
            view! { <ProjectCard project=project /> }.into_any()
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let border = format!("border-left-color: {}", project.color.hex());
    view! {
        <div class=css::card style=border>
            <h3 class=css::cardTitle>
                <a href={project.link} target="_blank" rel="noopener noreferrer">
                    {project.title}
                </a>
            </h3>
            <p class=css::cardDescription>{project.description}</p>
            <div>
                {project
                    .tags
                    .into_iter()
                    .map(|tag| {
                        let style = color_style(Color::for_tag(&tag));
                        view! { <span class=css::tag style=style>{tag}</span> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
