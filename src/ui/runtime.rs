use crate::coordinator::OrderSearchCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Runs the order screen until the user quits.
///
/// Redraws after every terminal event and every change published by the
/// coordinator.
pub async fn run(coordinator: OrderSearchCoordinator) -> io::Result<()> {
    let mut status_rx = coordinator.subscribe_status();
    let mut orders_rx = coordinator.subscribe_orders();
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(coordinator);
    let mut events = EventHandler::new(TICK_RATE);

    tracing::info!("Order screen started");
    app.on_view_ready();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Tick) => app.on_tick(),
                Some(AppEvent::Resize) => {}
                None => break,
            },
            changed = status_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                app.on_status(*status_rx.borrow_and_update());
            }
            changed = orders_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                app.on_orders(orders_rx.borrow_and_update().clone());
            }
        }
    }

    app.coordinator().shutdown();
    drop(guard);
    tracing::info!("Order screen closed");
    Ok(())
}
