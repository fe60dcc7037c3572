//! `CMake` build descriptors for the generated project.

use crate::config::EngineSettings;
use crate::project::ProjectDescriptor;

/// Render the top-level `CMakeLists.txt`.
///
/// Declares the project, pulls the engine in from a sibling directory and
/// descends into `src`.
#[must_use]
pub fn top_level(project: &ProjectDescriptor, engine: &EngineSettings) -> String {
    let name = project.name.as_str();
    let engine_name = &engine.name;
    let prefix = engine.cmake_prefix();
    let cmake_minimum = &engine.cmake_minimum;

    format!(
        "
cmake_minimum_required(VERSION {cmake_minimum})

project({name} C CXX)
set(VERSION 0.1)

add_subdirectory(${{{name}_SOURCE_DIR}}/../{engine_name} ${{{name}_BINARY_DIR}}/{engine_name})

include_directories(${{{prefix}_INCLUDE_DIRS}})
list(APPEND {name}_LIBRARIES ${{{prefix}_LIBRARIES}})

add_subdirectory(src)

"
    )
}

/// Render `src/CMakeLists.txt`.
///
/// Builds a single executable from `<Type>.cpp`, links it against the engine
/// and sets the bundle and Windows entry point properties.
#[must_use]
pub fn source_dir(project: &ProjectDescriptor, engine: &EngineSettings) -> String {
    let name = project.name.as_str();
    let display_name = project.name.capitalized();
    let source = project.source_file_name();
    let engine_name = &engine.name;
    let identifier = bundle_identifier(project, engine);

    format!(
        "
if (CMAKE_COMPILER_IS_GNUCXX)
  add_definitions(-std=c++0x)
endif()

set({name}_SOURCES {source})

add_executable({name} WIN32 MACOSX_BUNDLE ${{{name}_SOURCES}})
target_link_libraries({name} {engine_name} ${{{name}_LIBRARIES}})

set_target_properties({name} PROPERTIES
  MACOSX_BUNDLE_BUNDLE_NAME {display_name}
  MACOSX_BUNDLE_GUI_IDENTIFIER {identifier}
  DEBUG_POSTFIX \"_debug\")

if (MSVC)
  set_target_properties({name} PROPERTIES LINK_FLAGS \"/ENTRY:mainCRTStartup\")
endif()

"
    )
}

/// Reverse-DNS bundle identifier, e.g. `org.elmindreda.games.skyfall`.
#[must_use]
pub fn bundle_identifier(project: &ProjectDescriptor, engine: &EngineSettings) -> String {
    format!(
        "{}.{}.{}",
        engine.bundle_prefix,
        project.kind.bundle_segment(),
        project.name
    )
}
