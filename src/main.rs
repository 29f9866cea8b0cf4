use signup::component::SignupComponent;
use signup::configuration::get_configuration;
use signup::telemetry::{get_subscriber, init_subscriber};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Runs the sign-up form in the terminal: each line typed is entered into the
/// email field and submitted.
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("signup".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber);

    let config = get_configuration()?;
    let client = config.webhook.client();
    let mut component = SignupComponent::new();

    println!("{}\n", component.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        component.input(line.trim_end_matches('\r'));

        if let Some(signup) = component.begin_submit() {
            println!("{}\n", component.render());
            let outcome = client.send(&signup).await;
            component.finish_submit(outcome);
        }

        for toast in component.toaster_mut().dismiss_all() {
            println!("{}", toast);
        }
        println!("{}\n", component.render());

        if component.is_success() {
            break;
        }
    }

    Ok(())
}
