use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "mealplan";

fn mealplan(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("MEALPLAN_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn create_semester(data_dir: &TempDir) {
    mealplan(data_dir)
        .args([
            "semester",
            "create",
            "--start",
            "2025-09-01",
            "--end",
            "2025-12-10",
            "--dining-dollars",
            "500",
            "--swipes",
            "40",
            "--exchanges",
            "2",
            "--debit",
            "25",
        ])
        .assert()
        .success()
        .stdout(contains("Created semester: Fall 2025"));
}

#[test]
fn commands_without_a_semester_point_to_init() {
    let data_dir = TempDir::new().unwrap();

    mealplan(&data_dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(contains("mealplan init"));
}

#[test]
fn dashboard_derives_daily_allowances() {
    let data_dir = TempDir::new().unwrap();
    create_semester(&data_dir);

    mealplan(&data_dir)
        .args(["dashboard", "--as-of", "2025-11-30"])
        .assert()
        .success()
        .stdout(contains("Day 90 of 100"))
        .stdout(contains("10 days left"))
        .stdout(contains("4.0/day"))
        .stdout(contains("$50.00/day"));
}

#[test]
fn init_runs_the_wizard_from_stdin() {
    let data_dir = TempDir::new().unwrap();

    mealplan(&data_dir)
        .args(["init", "--name", "Spring Term"])
        .write_stdin("2026-01-12\n2026-01-01\n2026-05-08\n300\n120\nback\n\n\n\n\n0\n0\n\n")
        .assert()
        .success()
        .stdout(contains("End date must be after the start date"))
        .stdout(contains("Step 3 of 3"))
        .stdout(contains("Created semester: Spring Term"));

    mealplan(&data_dir)
        .args(["semester", "show"])
        .assert()
        .success()
        .stdout(contains("Meal Swipes:    120 of 120"))
        .stdout(contains("Meals per day:  3"));

    mealplan(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Setup completed:       true"));
}

#[test]
fn init_cancelled_by_end_of_input() {
    let data_dir = TempDir::new().unwrap();

    mealplan(&data_dir)
        .arg("init")
        .write_stdin("2026-01-12\n")
        .assert()
        .failure()
        .stderr(contains("Setup cancelled"));

    mealplan(&data_dir)
        .args(["semester", "list"])
        .assert()
        .success()
        .stdout(contains("No semesters yet"));
}

#[test]
fn expenses_update_category_progress() {
    let data_dir = TempDir::new().unwrap();
    create_semester(&data_dir);

    mealplan(&data_dir)
        .args(["category", "add", "Groceries", "100"])
        .assert()
        .success()
        .stdout(contains("Created category: Groceries"));

    mealplan(&data_dir)
        .args(["category", "add", "groceries", "50"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    mealplan(&data_dir)
        .args(["expense", "add", "groceries", "120", "-m", "Costco run", "-d", "2025-09-03"])
        .assert()
        .success()
        .stdout(contains("Recorded $120.00 in Groceries: Costco run"));

    mealplan(&data_dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(contains("Groceries"))
        .stdout(contains("OVER"));

    mealplan(&data_dir)
        .args(["dashboard", "--as-of", "2025-09-05"])
        .assert()
        .success()
        .stdout(contains("Groceries is over budget by $20.00"))
        .stdout(contains("Costco run"));

    mealplan(&data_dir)
        .args(["expense", "add", "Rent", "10"])
        .assert()
        .failure()
        .stderr(contains("Budget category not found"));
}

#[test]
fn removed_category_keeps_its_expenses() {
    let data_dir = TempDir::new().unwrap();
    create_semester(&data_dir);

    mealplan(&data_dir)
        .args(["category", "add", "Entertainment", "50"])
        .assert()
        .success();
    mealplan(&data_dir)
        .args(["expense", "add", "Entertainment", "12", "-m", "Movie night", "-d", "2025-09-05"])
        .assert()
        .success();

    mealplan(&data_dir)
        .args(["category", "remove", "entertainment"])
        .assert()
        .success()
        .stdout(contains("Removed category: Entertainment"));

    mealplan(&data_dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(contains("Entertainment").not());

    mealplan(&data_dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(contains("Movie night"));

    mealplan(&data_dir)
        .args(["category", "remove", "Entertainment"])
        .assert()
        .failure()
        .stderr(contains("Budget category not found"));
}

#[test]
fn meals_deduct_balances_and_reject_overdraw() {
    let data_dir = TempDir::new().unwrap();
    create_semester(&data_dir);

    mealplan(&data_dir)
        .args(["meal", "log", "lunch", "-d", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("Logged Lunch (Meal Swipe)"))
        .stdout(contains("Meal Swipes left: 39"));

    mealplan(&data_dir)
        .args(["meal", "log", "dinner", "-p", "debit-card", "-a", "30", "-d", "2025-09-02"])
        .assert()
        .failure()
        .stderr(contains("Insufficient"));

    mealplan(&data_dir)
        .args(["meal", "log", "dinner", "-p", "dining-dollars", "-d", "2025-09-02"])
        .assert()
        .failure()
        .stderr(contains("amount"));

    mealplan(&data_dir)
        .args(["meal", "list"])
        .assert()
        .success()
        .stdout(contains("Lunch").and(contains("Dinner").not()));

    mealplan(&data_dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(contains("Lunch (Meal Swipe)"));

    mealplan(&data_dir)
        .args(["calendar", "--month", "2025-09", "--as-of", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("September 2025"))
        .stdout(contains("1 meal"));
}

#[test]
fn trends_bucket_meals_by_week() {
    let data_dir = TempDir::new().unwrap();
    create_semester(&data_dir);

    for (args, day) in [
        (vec!["lunch"], "2025-09-02"),
        (vec!["dinner", "-p", "dining-dollars", "-a", "12.50"], "2025-09-03"),
        (vec!["lunch"], "2025-09-09"),
    ] {
        mealplan(&data_dir)
            .args(["meal", "log"])
            .args(args)
            .args(["-d", day])
            .assert()
            .success();
    }

    mealplan(&data_dir)
        .args(["trends", "--as-of", "2025-09-10"])
        .assert()
        .success()
        .stdout(contains("Weekly usage: Fall 2025"))
        .stdout(contains("Week 2"))
        .stdout(contains("Week 3").not())
        .stdout(contains("$12.50"));

    mealplan(&data_dir)
        .args(["trends", "--as-of", "2025-08-20"])
        .assert()
        .success()
        .stdout(contains("hasn't started yet"));
}

#[test]
fn oversized_amounts_are_rejected() {
    let data_dir = TempDir::new().unwrap();
    create_semester(&data_dir);

    mealplan(&data_dir)
        .args(["category", "add", "Tuition", "100"])
        .assert()
        .success();

    mealplan(&data_dir)
        .args(["expense", "add", "Tuition", "92233720368547758"])
        .assert()
        .failure()
        .stderr(contains("too large"));
}

#[test]
fn export_writes_files() {
    let data_dir = TempDir::new().unwrap();
    create_semester(&data_dir);

    mealplan(&data_dir)
        .args(["meal", "log", "breakfast", "-p", "dining-dollars", "-a", "8.50", "-d", "2025-09-02"])
        .assert()
        .success();

    let json_path = data_dir.path().join("export.json");
    mealplan(&data_dir)
        .args(["export", "all", "--pretty"])
        .arg(&json_path)
        .assert()
        .success()
        .stdout(contains("Exported Fall 2025"));
    let json = std::fs::read_to_string(&json_path).unwrap();
    assert!(json.contains("\"schema_version\": \"1.0.0\""));
    assert!(json.contains("\"meal_log_count\": 1"));

    let csv_path = data_dir.path().join("meals.csv");
    mealplan(&data_dir)
        .args(["export", "meals"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(contains("Exported 1 meal logs"));
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.contains(",breakfast,dining-dollars,8.50"));
}
