mod render;
mod rest;

use clap::{Args, Parser, Subcommand};
use hierarchy::{Navigator, NewObject, ObjectId, ObjectSource, ObjectType, ObjectUpdate, Session, SourceError};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::rest::RestClient;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing token; run `estate login` and pass --token or set ESTATE_TOKEN")]
    MissingToken,
    #[error("unknown object type `{0}`; expected one of: {1}")]
    UnknownType(String, String),
    #[error("name must not be empty")]
    EmptyName,
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "estate", about = "Property object hierarchy CLI")]
struct Cli {
    #[arg(long, env = "ESTATE_BASE_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    #[arg(long, env = "ESTATE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and print the bearer token.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "ESTATE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show the signed-in user.
    Whoami,
    /// List every staff account.
    Users,
    /// List every object, top-level ones first.
    Objects,
    /// Print one object with its ancestor path.
    Show { id: ObjectId },
    /// Print the descendants of an object.
    Tree(TreeArgs),
    Create(CreateArgs),
    Rename { id: ObjectId, name: String },
    Delete { id: ObjectId },
    /// Make a user responsible for an object.
    Assign { id: ObjectId, user_id: ObjectId },
    /// Clear the responsible user of an object.
    Unassign { id: ObjectId },
}

#[derive(Args, Debug)]
struct TreeArgs {
    id: ObjectId,
    /// Levels to expand below the direct children.
    #[arg(long, default_value_t = 1)]
    depth: usize,
}

#[derive(Args, Debug)]
struct CreateArgs {
    #[arg(long)]
    name: String,
    /// Type code, e.g. BUILDING or FLOOR.
    #[arg(long = "type")]
    object_type: String,
    #[arg(long)]
    parent: Option<ObjectId>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let session = cli.token.as_deref().map_or_else(Session::anonymous, Session::with_token);
    let client = RestClient::new(&cli.base_url, session.clone());

    if let Command::Login { username, password } = &cli.command {
        let auth = client.login(username, password).await?;
        println!("{}", auth.jwt_token);
        return Ok(());
    }
    if !session.is_authenticated() {
        return Err(CliError::MissingToken);
    }
    run(&client, cli.command).await
}

async fn run(client: &RestClient, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { .. } => Ok(()),
        Command::Whoami => {
            let user = client.current_user().await?;
            println!("{} ({}) roles={}", user.display_name(), user.username, user.roles);
            Ok(())
        }
        Command::Users => {
            print!("{}", render::render_users(&client.list_users().await?));
            Ok(())
        }
        Command::Objects => {
            let mut objects = client.list_objects().await?;
            hierarchy::object::sort_for_display(&mut objects);
            print!("{}", render::render_objects(&objects));
            Ok(())
        }
        Command::Show { id } => {
            let object = client.get_object(&id).await?;
            match client.ancestry(&id).await {
                Ok(path) if !path.is_empty() => println!("{}", render::render_path(&path)),
                Ok(_) => println!("{}", object.name),
                Err(err) => {
                    tracing::debug!(%id, error = %err, "path lookup failed");
                    println!("{}", object.name);
                }
            }
            print_json(&serde_json::to_value(&object)?)
        }
        Command::Tree(args) => run_tree(client, args).await,
        Command::Create(args) => {
            let object = new_object(args)?;
            print_optional(client.create_object(&object).await?)
        }
        Command::Rename { id, name } => {
            if name.trim().is_empty() {
                return Err(CliError::EmptyName);
            }
            let object = client.get_object(&id).await?;
            print_optional(client.update_object(&id, &ObjectUpdate::rename(&object, &name)).await?)
        }
        Command::Delete { id } => print_optional(client.delete_object(&id).await?),
        Command::Assign { id, user_id } => print_optional(client.assign_responsible(&id, &user_id).await?),
        Command::Unassign { id } => print_optional(client.remove_responsible(&id).await?),
    }
}

async fn run_tree(client: &RestClient, args: TreeArgs) -> Result<(), CliError> {
    let mut navigator = Navigator::new(client.clone(), args.id);
    navigator.load().await?;
    navigator.expand_to_depth(args.depth).await;
    print!("{}", render::render_tree(navigator.tree()));
    Ok(())
}

fn new_object(args: CreateArgs) -> Result<NewObject, CliError> {
    let name = args.name.trim().to_owned();
    if name.is_empty() {
        return Err(CliError::EmptyName);
    }
    let object_type = ObjectType::from(args.object_type.trim().to_ascii_uppercase());
    if let ObjectType::Other(code) = &object_type {
        let known = ObjectType::KNOWN.iter().map(ObjectType::code).collect::<Vec<_>>().join(", ");
        return Err(CliError::UnknownType(code.clone(), known));
    }
    Ok(NewObject { name, object_type, parent_id: args.parent })
}

fn print_optional(value: Option<Value>) -> Result<(), CliError> {
    match value {
        Some(value) => print_json(&value),
        None => {
            println!("ok");
            Ok(())
        }
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str, object_type: &str) -> CreateArgs {
        CreateArgs { name: name.to_owned(), object_type: object_type.to_owned(), parent: Some(ObjectId::from(3)) }
    }

    #[test]
    fn new_object_normalizes_type_code() {
        let object = new_object(args(" Floor 4 ", "floor")).unwrap();
        assert_eq!(object.name, "Floor 4");
        assert_eq!(object.object_type, ObjectType::Floor);
        assert_eq!(object.parent_id, Some(ObjectId::from(3)));
    }

    #[test]
    fn new_object_rejects_unknown_type() {
        let err = new_object(args("Roof", "roof")).unwrap_err();
        assert!(err.to_string().contains("unknown object type `ROOF`"));
        assert!(err.to_string().contains("BUILDING"));
    }

    #[test]
    fn new_object_rejects_blank_name() {
        assert!(matches!(new_object(args("  ", "FLOOR")), Err(CliError::EmptyName)));
    }

    #[test]
    fn cli_parses_tree_depth() {
        let cli = Cli::try_parse_from(["estate", "--token", "t", "tree", "42", "--depth", "3"]).unwrap();
        let Command::Tree(tree) = cli.command else {
            panic!("expected tree command");
        };
        assert_eq!(tree.id, ObjectId::from(42));
        assert_eq!(tree.depth, 3);
    }
}
