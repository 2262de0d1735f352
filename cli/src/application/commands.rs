use std::path::PathBuf;

use nutrilens_core::domain::common::entities::language::Language;

/// A line typed at the session prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Image(PathBuf),
    Text(String),
    Answer(String),
    Plan,
    Save(PathBuf),
    Lang(Language),
    Tip,
    Reset,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("{0}")]
    InvalidArgument(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Empty);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let argument = |command: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(command))
            } else {
                Ok(rest.to_string())
            }
        };

        match name.to_lowercase().as_str() {
            "image" | "imagen" | "img" => argument("image").map(|p| Command::Image(PathBuf::from(p))),
            "text" | "texto" => argument("text").map(Command::Text),
            "answer" | "responder" => argument("answer").map(Command::Answer),
            "plan" => Ok(Command::Plan),
            "save" | "guardar" => argument("save").map(|p| Command::Save(PathBuf::from(p))),
            "lang" | "idioma" => argument("lang")?
                .parse::<Language>()
                .map(Command::Lang)
                .map_err(CommandError::InvalidArgument),
            "tip" | "consejo" => Ok(Command::Tip),
            "reset" | "reiniciar" => Ok(Command::Reset),
            "help" | "ayuda" | "?" => Ok(Command::Help),
            "quit" | "exit" | "salir" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub fn help_text(language: Language) -> &'static str {
    match language {
        Language::Es => {
            "Comandos:
  image <ruta>      analiza una foto PNG o JPEG
  text <descripción> analiza una comida descrita con palabras
  answer <texto>    responde a la pregunta de aclaración
  plan              crea un plan de comidas personalizado
  save <ruta>       guarda el resultado o el plan actual como JSON
  lang es|en        cambia el idioma
  tip               muestra un consejo de salud
  reset             vuelve al inicio
  help              muestra esta ayuda
  quit              salir"
        }
        Language::En => {
            "Commands:
  image <path>      analyze a PNG or JPEG photo
  text <description> analyze a meal described in words
  answer <text>     answer the clarification question
  plan              create a personalized meal plan
  save <path>       save the current result or plan as JSON
  lang es|en        switch language
  tip               show a health tip
  reset             go back to the start
  help              show this help
  quit              exit"
        }
    }
}
