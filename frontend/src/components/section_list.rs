use shared::{ListItem, ListSection, ListStyle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionListProps {
    pub list: ListSection,
    pub section_id: AttrValue,
}

/// Text sections of the dashboard. Entries are keyed by their position in
/// the payload, so duplicate entries stay distinct.
#[function_component(SectionList)]
pub fn section_list(props: &SectionListProps) -> Html {
    let list = &props.list;

    let body = match list.style {
        ListStyle::Bulleted => html! {
            <ul class="section-list">
                { for list.items.iter().map(render_item) }
            </ul>
        },
        ListStyle::Cloud => html! {
            <div class="hashtag-cloud">
                { for list.items.iter().map(|item| html! {
                    <span key={item.key} class="hashtag">{ &item.heading }</span>
                }) }
            </div>
        },
    };

    html! {
        <section class="dashboard-section" id={props.section_id.clone()}>
            <h2 class="section-title">{ &list.title }</h2>
            { body }
        </section>
    }
}

fn render_item(item: &ListItem) -> Html {
    if item.details.is_empty() {
        return html! { <li key={item.key}>{ &item.heading }</li> };
    }

    html! {
        <li key={item.key} class="section-item">
            <h3 class="item-heading">{ &item.heading }</h3>
            { for item.details.iter().map(|detail| html! { <p class="item-detail">{ detail }</p> }) }
        </li>
    }
}
