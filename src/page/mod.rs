mod html;
mod insights;
mod landing;
mod layout;

pub use insights::{
    render_insights, Tab, Visualization, ALL_VISUALIZATIONS, TAG_WORDCLOUD_PATH,
};
pub use landing::render_landing;
