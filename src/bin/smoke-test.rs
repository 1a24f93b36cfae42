//! Smoke test binary for the launcher command flow.
//!
//! Run with: cargo run --bin smoke-test
//!
//! This tests, against a scripted host and the real shell:
//! 1. Settings bootstrap with defaults
//! 2. Script creation from the template
//! 3. Script discovery and fuzzy filtering
//! 4. Launching the created script with the environment bridge
//! 5. Command-line run with history normalization

use std::collections::VecDeque;
use std::io::Write;
use std::path::{Path, PathBuf};

use launchscripts::commands::Launcher;
use launchscripts::host::{
    HostUi, PaneContext, PaneInfo, PromptReply, QuicksearchPick, QuicksearchSource,
};
use launchscripts::logging;
use launchscripts::runner::ShellRunner;
use launchscripts::scripts::list_script_names;
use launchscripts::search::fuzzy_filter;
use launchscripts::settings::{Settings, SettingsStore};

/// Host UI answering from queues and echoing everything to stdout.
struct ScriptedUi {
    prompt_replies: VecDeque<String>,
    picks: VecDeque<QuicksearchPick>,
    alerts: Vec<String>,
}

impl ScriptedUi {
    fn new() -> Self {
        ScriptedUi {
            prompt_replies: VecDeque::new(),
            picks: VecDeque::new(),
            alerts: Vec::new(),
        }
    }
}

impl HostUi for ScriptedUi {
    fn show_prompt(&mut self, message: &str) -> PromptReply {
        let text = self.prompt_replies.pop_front().unwrap_or_default();
        println!("   prompt \"{}\" -> \"{}\"", message, text);
        PromptReply {
            text,
            accepted: true,
        }
    }

    fn show_quicksearch(&mut self, source: &mut dyn QuicksearchSource) -> Option<QuicksearchPick> {
        let offered = source.suggest("").count();
        println!("   picker offered {} candidate(s)", offered);
        self.picks.pop_front()
    }

    fn show_alert(&mut self, message: &str) {
        println!("   alert: {}", message.trim_end());
        self.alerts.push(message.to_string());
    }

    fn show_status_message(&mut self, message: &str) {
        println!("   status: {}", message);
    }

    fn clear_status_message(&mut self) {}
}

/// Fixed dual-pane state rooted in the smoke workspace.
struct ScriptedPane {
    current_dir: PathBuf,
    cursor: Option<PathBuf>,
}

impl PaneContext for ScriptedPane {
    fn current_dir(&self) -> PathBuf {
        self.current_dir.clone()
    }
    fn set_current_dir(&mut self, path: &Path) {
        self.current_dir = path.to_path_buf();
    }
    fn selected_files(&self) -> Vec<PathBuf> {
        Vec::new()
    }
    fn file_under_cursor(&self) -> Option<PathBuf> {
        self.cursor.clone()
    }
    fn left_pane(&self) -> PaneInfo {
        PaneInfo {
            path: self.current_dir.clone(),
            file_under_cursor: self.cursor.clone(),
        }
    }
    fn right_pane(&self) -> PaneInfo {
        PaneInfo {
            path: self.current_dir.clone(),
            file_under_cursor: None,
        }
    }
    fn editor_available(&self) -> bool {
        false
    }
    fn open_editor(&mut self, _path: &Path) {}
}

fn main() {
    let _guard = logging::init();

    println!("=== launchscripts smoke test ===\n");

    let base = std::env::temp_dir().join(format!("launchscripts-smoke-{}", std::process::id()));
    let scripts_dir = base.join("bin");
    std::fs::create_dir_all(&scripts_dir).expect("create scripts dir");
    let shell_file = base.join("shellrc");
    std::fs::write(&shell_file, "# smoke test shell init\n").expect("write shell file");

    let mut failures = 0u32;

    // Test 1: settings bootstrap
    println!("1. Testing settings bootstrap...");
    let store = SettingsStore::with_path(base.join("LaunchScript.json"));
    match store.load() {
        Ok(settings) if settings.show_output && !settings.command_line_history.is_empty() => {
            println!("   ✓ defaults written to {}", store.path().display());
        }
        Ok(_) => {
            println!("   ✗ FAILED: unexpected default settings");
            failures += 1;
        }
        Err(e) => {
            println!("   ✗ FAILED: {}", e);
            failures += 1;
        }
    }
    let settings = Settings {
        show_output: true,
        directory: scripts_dir.to_string_lossy().into_owned(),
        local_shell: shell_file.to_string_lossy().into_owned(),
        command_line_history: vec!["ls -la".to_string()],
    };
    store.save(&settings).expect("save smoke settings");
    println!();

    let mut ui = ScriptedUi::new();
    let mut pane = ScriptedPane {
        current_dir: base.clone(),
        cursor: None,
    };
    let mut runner = ShellRunner;

    // Test 2: script creation
    println!("2. Testing script creation...");
    ui.prompt_replies.push_back("hello-world.sh".to_string());
    let created = Launcher::new(&mut ui, &mut pane, &mut runner, &store).create_script();
    let script_path = scripts_dir.join("hello-world.sh");
    match created {
        Ok(()) if script_path.is_file() => println!("   ✓ created {}", script_path.display()),
        Ok(()) => {
            println!("   ✗ FAILED: command succeeded but script is missing");
            failures += 1;
        }
        Err(e) => {
            println!("   ✗ FAILED: {}", e);
            failures += 1;
        }
    }
    // Give the template something to say when launched
    let mut script = std::fs::OpenOptions::new()
        .append(true)
        .open(&script_path)
        .expect("open created script");
    writeln!(script, "echo \"hello from $CURRENT_DIRECTORY\"").expect("append to script");
    drop(script);
    println!();

    // Test 3: discovery and fuzzy filtering
    println!("3. Testing script discovery and fuzzy filtering...");
    let names = list_script_names(&scripts_dir).expect("list scripts");
    let hits: Vec<_> = fuzzy_filter("hw", &names).collect();
    if hits.len() == 1 && hits[0].text == "hello-world.sh" && hits[0].indices == vec![0, 6] {
        println!("   ✓ \"hw\" matched hello-world.sh at {:?}", hits[0].indices);
    } else {
        println!("   ✗ FAILED: unexpected matches {:?}", hits);
        failures += 1;
    }
    println!();

    // Test 4: launching the created script
    println!("4. Testing script launch...");
    ui.picks.push_back(QuicksearchPick {
        query: "hw".to_string(),
        item: "hello-world.sh".to_string(),
    });
    ui.alerts.clear();
    match Launcher::new(&mut ui, &mut pane, &mut runner, &store).launch_script() {
        Ok(()) => {
            let expected = format!("hello from {}", base.display());
            if ui.alerts.iter().any(|a| a.contains(&expected)) {
                println!("   ✓ script ran and reported its environment");
            } else {
                println!("   ✗ FAILED: output alert missing, got {:?}", ui.alerts);
                failures += 1;
            }
        }
        Err(e) => {
            println!("   ✗ FAILED: {}", e);
            failures += 1;
        }
    }
    println!();

    // Test 5: command-line run with history
    println!("5. Testing command-line run...");
    ui.picks.push_back(QuicksearchPick {
        query: "printf smoke-ok".to_string(),
        item: "ls -la".to_string(),
    });
    ui.alerts.clear();
    match Launcher::new(&mut ui, &mut pane, &mut runner, &store).run_command_line() {
        Ok(()) => {
            let history = store
                .load()
                .map(|s| s.command_line_history)
                .unwrap_or_default();
            let alerted = ui.alerts.iter().any(|a| a.contains("smoke-ok"));
            let recorded = history.contains(&"printf smoke-ok".to_string());
            let sorted = history.windows(2).all(|w| w[0] <= w[1]);
            if alerted && recorded && sorted {
                println!("   ✓ command ran, history is sorted: {:?}", history);
            } else {
                println!(
                    "   ✗ FAILED: alerted={} recorded={} sorted={} history={:?}",
                    alerted, recorded, sorted, history
                );
                failures += 1;
            }
        }
        Err(e) => {
            println!("   ✗ FAILED: {}", e);
            failures += 1;
        }
    }
    println!();

    let _ = std::fs::remove_dir_all(&base);

    if failures == 0 {
        println!("=== Smoke Test Complete ===");
    } else {
        println!("=== Smoke Test Complete: {} failure(s) ===", failures);
        std::process::exit(1);
    }
}
