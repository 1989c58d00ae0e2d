mod app;
mod keymap;
mod ui;
mod view;

use std::error::Error;

use log::info;

use crate::app::App;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    info!("Entering terminal mode");
    let mut terminal = ratatui::init();
    let result = App::new().run(&mut terminal).await;
    ratatui::restore();
    info!("Terminal restored, exiting");

    result
}
