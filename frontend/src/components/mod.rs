pub mod chart_renderer;
pub mod section_list;
