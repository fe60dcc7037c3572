//! C++ header and source stubs for the generated project class.
//!
//! The class is named after the project type and lives in a namespace named
//! after the project. It owns a resource cache, a rendering context, an audio
//! context and a vertex pool, and runs a plain clear/update frame loop.

use crate::config::EngineSettings;
use crate::project::ProjectDescriptor;

/// Render `src/<Type>.h`.
#[must_use]
pub fn header(project: &ProjectDescriptor, engine: &EngineSettings) -> String {
    let name = project.name.as_str();
    let class = project.kind.as_str();
    let engine_name = &engine.name;

    format!(
        "
namespace {name}
{{

using namespace {engine_name};

class {class} : public EventHook
{{
public:
  {class}();
  ~{class}();
  bool init();
  void run();
private:
  ResourceCache cache;
  Ptr<GL::Context> context;
  Ptr<AudioContext> audioContext;
  Ref<render::VertexPool> pool;
}};

}} /*namespace {name}*/

"
    )
}

/// Render `src/<Type>.cpp`, including the program entry point.
#[must_use]
pub fn source(project: &ProjectDescriptor, engine: &EngineSettings) -> String {
    let name = project.name.as_str();
    let title = project.name.capitalized();
    let class = project.kind.as_str();
    let instance = project.kind.lowercase();
    let header = project.header_file_name();
    let engine_name = &engine.name;
    let umbrella = engine.umbrella_header();

    format!(
        "
#include <{umbrella}>

#include <cstdlib>

#include \"{header}\"

namespace {name}
{{

using namespace {engine_name};

{class}::{class}()
{{
}}

{class}::~{class}()
{{
  pool = nullptr;
  context = nullptr;
  audioContext = nullptr;
}}

bool {class}::init()
{{
  if (!cache.addSearchPath(Path(\"data\")))
  {{
    logError(\"Failed to locate data directory\");
    return false;
  }}

  audioContext = AudioContext::create(cache);
  if (!audioContext)
  {{
    logError(\"Failed to create audio context\");
    return false;
  }}

  WindowConfig wc(\"{title}\");
  GL::ContextConfig cc;

  context = GL::Context::create(cache, wc, cc);
  if (!context)
  {{
    logError(\"Failed to create OpenGL context\");
    return false;
  }}

  pool = render::VertexPool::create(*context);
  if (!pool)
  {{
    logError(\"Failed to create vertex pool\");
    return false;
  }}

  return true;
}}

void {class}::run()
{{
  Window& window = context->window();

  do
  {{
    context->clearBuffers();
  }}
  while (window.update());
}}

}} /*namespace {name}*/

int main()
{{
  {engine_name}::Ptr<{name}::{class}> {instance}(new {name}::{class}());
  if (!{instance}->init())
    std::exit(EXIT_FAILURE);

  {instance}->run();
  {instance} = nullptr;

  std::exit(EXIT_SUCCESS);
}}

"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skyfall() -> ProjectDescriptor {
        ProjectDescriptor::parse("Game", "skyfall", None).unwrap()
    }

    #[test]
    fn test_header_matches_expected_text() {
        let expected = "
namespace skyfall
{

using namespace wendy;

class Game : public EventHook
{
public:
  Game();
  ~Game();
  bool init();
  void run();
private:
  ResourceCache cache;
  Ptr<GL::Context> context;
  Ptr<AudioContext> audioContext;
  Ref<render::VertexPool> pool;
};

} /*namespace skyfall*/

";
        assert_eq!(header(&skyfall(), &EngineSettings::default()), expected);
    }

    #[test]
    fn test_source_includes_engine_and_header() {
        let text = source(&skyfall(), &EngineSettings::default());
        assert!(text.starts_with("\n#include <wendy/Wendy.h>\n\n#include <cstdlib>\n\n#include \"Game.h\"\n"));
        assert!(text.contains("namespace skyfall\n{\n\nusing namespace wendy;\n"));
    }

    #[test]
    fn test_destructor_releases_in_order() {
        let text = source(&skyfall(), &EngineSettings::default());
        assert!(text.contains(
            "Game::~Game()\n{\n  pool = nullptr;\n  context = nullptr;\n  audioContext = nullptr;\n}"
        ));
    }

    #[test]
    fn test_init_steps_appear_in_order() {
        let text = source(&skyfall(), &EngineSettings::default());
        let steps = [
            "cache.addSearchPath(Path(\"data\"))",
            "Failed to locate data directory",
            "AudioContext::create(cache)",
            "Failed to create audio context",
            "WindowConfig wc(\"Skyfall\");",
            "GL::Context::create(cache, wc, cc)",
            "Failed to create OpenGL context",
            "render::VertexPool::create(*context)",
            "Failed to create vertex pool",
            "return true;",
        ];

        let mut cursor = 0;
        for step in steps {
            let found = text[cursor..]
                .find(step)
                .unwrap_or_else(|| panic!("{step:?} missing or out of order"));
            cursor += found + step.len();
        }
    }

    #[test]
    fn test_run_is_a_clear_update_loop() {
        let text = source(&skyfall(), &EngineSettings::default());
        assert!(text.contains(
            "void Game::run()\n{\n  Window& window = context->window();\n\n  do\n  {\n    context->clearBuffers();\n  }\n  while (window.update());\n}"
        ));
    }

    #[test]
    fn test_main_instantiates_namespaced_class() {
        let text = source(&skyfall(), &EngineSettings::default());
        assert!(text.contains("int main()\n{"));
        assert!(text.contains("wendy::Ptr<skyfall::Game> game(new skyfall::Game());"));
        assert!(text.contains("if (!game->init())\n    std::exit(EXIT_FAILURE);"));
        assert!(text.contains("game->run();\n  game = nullptr;\n\n  std::exit(EXIT_SUCCESS);"));
        assert!(text.ends_with("}\n\n"));
    }

    #[test]
    fn test_kind_and_name_drive_identifiers() {
        let project = ProjectDescriptor::parse("demo", "Widgets", None).unwrap();
        let engine = EngineSettings::default();

        let h = header(&project, &engine);
        assert!(h.contains("namespace widgets\n"));
        assert!(h.contains("class Demo : public EventHook"));
        assert!(h.contains("} /*namespace widgets*/"));

        let cpp = source(&project, &engine);
        assert!(cpp.contains("#include \"Demo.h\""));
        assert!(cpp.contains("WindowConfig wc(\"Widgets\");"));
        assert!(cpp.contains("wendy::Ptr<widgets::Demo> demo(new widgets::Demo());"));
    }
}
