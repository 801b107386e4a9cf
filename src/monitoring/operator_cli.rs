use crate::communication::messages::{parse_command, OperatorCommand};
use crate::engine::session::Session;
use crate::flow_analyzer::metrics_aggregator::SystemMetrics;
use crate::monitoring::alerts::Alert;
use crate::monitoring::dispatch::DispatchedUnit;
use crate::monitoring::report::generate_report;
use crate::shared_data::NetworkSnapshot;
use std::io::{stdin, stdout, BufRead, Write};

/// What the console loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue(String),
    Quit,
}

pub const HELP: &str = "\
Commands:
  show                 signals, vehicles and the selected node
  metrics              system overview
  alerts               active alerts
  dispatch             dispatched emergency units
  select <id>          focus a node (again to unfocus)
  clear                clear the selection
  pause | resume       stop or restart signal cycling and vehicle movement
  auto on|off          toggle automatic signal timing
  timing <secs>        manual signal timing, 15-90 seconds (auto mode off)
  reset                restore the initial map layout
  report [dir]         write CSV files and a wait-time chart
  json                 dump the full dashboard snapshot
  quit";

/// Detail card for the focused node, or `None` if it is not on the map.
pub fn format_selection(snapshot: &NetworkSnapshot, id: &str) -> Option<String> {
    if let Some(signal) = snapshot.signals.iter().find(|s| s.id == id) {
        return Some(format!(
            "[Traffic Signal] {} ({})\n  Status: {:?}\n  Density: {:?}\n  Location: {}, {}",
            signal.id,
            signal.location,
            signal.light_state,
            signal.density,
            signal.position.x.round(),
            signal.position.y.round()
        ));
    }
    snapshot.vehicles.iter().find(|v| v.id == id).map(|vehicle| {
        format!(
            "[Emergency Vehicle] {}\n  Status: {:?}\n  Density: {:?}\n  Location: {}, {}",
            vehicle.id,
            vehicle.activity,
            vehicle.density,
            vehicle.position.x.round(),
            vehicle.position.y.round()
        )
    })
}

pub fn format_network(snapshot: &NetworkSnapshot, selection: Option<&str>) -> String {
    let mut out = String::from("Signals:\n");
    for signal in &snapshot.signals {
        out.push_str(&format!(
            "  {:<12} {:<20} {:?}\n",
            signal.id, signal.location, signal.light_state
        ));
    }
    out.push_str("Emergency vehicles:\n");
    for vehicle in &snapshot.vehicles {
        out.push_str(&format!(
            "  {:<12} ({:>5.1}, {:>5.1}) {:?}\n",
            vehicle.id, vehicle.position.x, vehicle.position.y, vehicle.activity
        ));
    }
    if let Some(id) = selection {
        match format_selection(snapshot, id) {
            Some(card) => out.push_str(&card),
            None => out.push_str(&format!("Selected node {} is not on the map", id)),
        }
    }
    out.trim_end().to_string()
}

pub fn format_metrics(metrics: &SystemMetrics) -> String {
    format!(
        "Active Signals: {}\nEmergency Vehicles: {}\nAvg Wait Time: {}s\nSystem Health: {}%",
        metrics.active_signal_count,
        metrics.emergency_vehicle_count,
        metrics.average_wait_seconds.round(),
        metrics.system_health_percent
    )
}

pub fn format_alerts(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return "No active alerts.".to_string();
    }
    alerts
        .iter()
        .map(|a| format!("#{} [{:?}] {} @ {}", a.id, a.category, a.message, a.location))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_dispatch(units: &[DispatchedUnit]) -> String {
    units
        .iter()
        .map(|u| {
            format!(
                "{} {} ({:?}) at {}, ETA {} min, {}",
                u.id, u.unit, u.priority, u.location, u.eta_minutes, u.route
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Applies one operator command to the session and renders the reply.
pub fn execute(session: &Session, command: OperatorCommand) -> CommandOutcome {
    let reply = match command {
        OperatorCommand::ShowNetwork => {
            let selection = session.current_selection();
            format_network(&session.network_snapshot(), selection.as_deref())
        }
        OperatorCommand::ShowMetrics => format_metrics(&session.metrics_snapshot()),
        OperatorCommand::ShowAlerts => format_alerts(&session.list_alerts()),
        OperatorCommand::ShowDispatch => format_dispatch(&session.dispatch_roster()),
        OperatorCommand::Select(id) => match session.select(Some(id.as_str())) {
            Some(selected) => format_selection(&session.network_snapshot(), &selected)
                .unwrap_or_else(|| format!("Selected {} (not on the map)", selected)),
            None => "Selection cleared.".to_string(),
        },
        OperatorCommand::ClearSelection => {
            session.select(None);
            "Selection cleared.".to_string()
        }
        OperatorCommand::Pause => {
            session.set_paused(true);
            "Network paused.".to_string()
        }
        OperatorCommand::Resume => {
            session.set_paused(false);
            "Network running.".to_string()
        }
        OperatorCommand::AutoMode(on) => {
            session.set_auto_mode(on);
            format!("Signal timing: {}", if on { "AUTO" } else { "MANUAL" })
        }
        OperatorCommand::SignalTiming(seconds) => match session.set_signal_timing_seconds(seconds)
        {
            Ok(()) => format!("Signal timing set to {}s.", seconds),
            Err(e) => format!("Rejected: {}", e),
        },
        OperatorCommand::Reset => {
            session.reset_network();
            "Network reset.".to_string()
        }
        OperatorCommand::Report(dir) => {
            match generate_report(&dir, &session.metrics_history(), &session.list_alerts()) {
                Ok(files) => format!(
                    "Report written: {}, {}{}",
                    files.metrics_csv.display(),
                    files.alerts_csv.display(),
                    files
                        .wait_chart
                        .map(|p| format!(", {}", p.display()))
                        .unwrap_or_default()
                ),
                Err(e) => format!("Error generating report: {}", e),
            }
        }
        OperatorCommand::Json => match serde_json::to_string_pretty(&session.dashboard_snapshot())
        {
            Ok(json) => json,
            Err(e) => format!("Error serializing snapshot: {}", e),
        },
        OperatorCommand::Help => HELP.to_string(),
        OperatorCommand::Quit => return CommandOutcome::Quit,
    };
    CommandOutcome::Continue(reply)
}

/// Reads commands from stdin until `quit` or end of input. Blocks the calling thread.
pub fn run_cli(session: &Session) {
    println!("\nTraffic Control Dashboard Operator CLI (type `help`)");
    let stdin = stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = stdout().flush();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(command) => match execute(session, command) {
                CommandOutcome::Continue(reply) => println!("{}", reply),
                CommandOutcome::Quit => {
                    println!("Exiting CLI.");
                    break;
                }
            },
            Err(e) => println!("{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;

    fn session() -> Session {
        Session::stepped(SessionConfig {
            seed: Some(1),
            ..SessionConfig::default()
        })
        .unwrap()
    }

    fn reply(outcome: CommandOutcome) -> String {
        match outcome {
            CommandOutcome::Continue(reply) => reply,
            CommandOutcome::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn select_shows_detail_card_and_toggles() {
        let session = session();
        let card = reply(execute(&session, OperatorCommand::Select("signal-2".into())));
        assert!(card.contains("Traffic Signal"));
        assert!(card.contains("Central Blvd & Oak"));
        assert!(card.contains("High"));

        let cleared = reply(execute(&session, OperatorCommand::Select("signal-2".into())));
        assert_eq!(cleared, "Selection cleared.");
        assert_eq!(session.current_selection(), None);
    }

    #[test]
    fn selecting_an_unknown_node_is_reported_not_refused() {
        let session = session();
        let text = reply(execute(&session, OperatorCommand::Select("ghost".into())));
        assert!(text.contains("not on the map"));
        assert_eq!(session.current_selection().as_deref(), Some("ghost"));
    }

    #[test]
    fn timing_command_reports_rejection() {
        let session = session();
        let text = reply(execute(&session, OperatorCommand::SignalTiming(10)));
        assert!(text.starts_with("Rejected"));
        assert_eq!(session.controls().signal_timing_secs, 45);
    }

    #[test]
    fn timing_command_is_refused_in_auto_mode() {
        let session = session();
        let text = reply(execute(&session, OperatorCommand::SignalTiming(60)));
        assert!(text.contains("auto mode"));
        assert_eq!(session.controls().signal_timing_secs, 45);

        execute(&session, OperatorCommand::AutoMode(false));
        let text = reply(execute(&session, OperatorCommand::SignalTiming(60)));
        assert_eq!(text, "Signal timing set to 60s.");
        assert_eq!(session.controls().signal_timing_secs, 60);
    }

    #[test]
    fn metrics_card_rounds_wait_time() {
        let text = format_metrics(&SystemMetrics::default());
        assert!(text.contains("Avg Wait Time: 45s"));
        assert!(text.contains("System Health: 98%"));
    }

    #[test]
    fn quit_ends_the_loop() {
        assert_eq!(execute(&session(), OperatorCommand::Quit), CommandOutcome::Quit);
    }
}
