//! JSON Schema for ECS task definitions.
//!
//! Generates a Draft-07 schema describing the basic shape of a task
//! definition. It is intentionally loose: it checks required fields, field
//! types and a few enumerations, not Fargate compatibility.

use serde_json::{json, Value};

/// Generates the task definition JSON Schema.
pub struct TaskDefinitionSchema;

impl TaskDefinitionSchema {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete schema.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "ECS Task Definition",
            "type": "object",
            "required": ["family", "containerDefinitions"],
            "properties": {
                "family": { "type": "string" },
                "taskRoleArn": { "type": "string" },
                "executionRoleArn": { "type": "string" },
                "networkMode": { "type": "string" },
                "cpu": { "type": "string" },
                "memory": { "type": "string" },
                "requiresCompatibilities": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "runtimePlatform": {
                    "type": "object",
                    "properties": {
                        "cpuArchitecture": { "type": "string" },
                        "operatingSystemFamily": { "type": "string" }
                    }
                },
                "ephemeralStorage": {
                    "type": "object",
                    "required": ["sizeInGiB"],
                    "properties": {
                        "sizeInGiB": { "type": "integer" }
                    }
                },
                "containerDefinitions": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/containerDefinition" }
                },
                "volumes": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/volume" }
                },
                "placementConstraints": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/placementConstraint" }
                }
            },
            "definitions": self.definitions()
        })
    }

    fn definitions(&self) -> Value {
        json!({
            "containerDefinition": self.container_definition_schema(),
            "portMapping": {
                "type": "object",
                "properties": {
                    "containerPort": { "type": "integer" },
                    "hostPort": { "type": "integer" },
                    "protocol": { "enum": ["tcp", "udp"] }
                }
            },
            "healthCheck": {
                "type": "object",
                "required": ["command"],
                "properties": {
                    "command": { "type": "array", "items": { "type": "string" } },
                    "interval": { "type": "integer" },
                    "timeout": { "type": "integer" },
                    "retries": { "type": "integer" },
                    "startPeriod": { "type": "integer" }
                }
            },
            "environmentVariable": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "value": { "type": "string" }
                }
            },
            "secret": {
                "type": "object",
                "required": ["name", "valueFrom"],
                "properties": {
                    "name": { "type": "string" },
                    "valueFrom": { "type": "string" }
                }
            },
            "extraHost": {
                "type": "object",
                "required": ["hostname", "ipAddress"],
                "properties": {
                    "hostname": { "type": "string" },
                    "ipAddress": { "type": "string" }
                }
            },
            "mountPoint": {
                "type": "object",
                "properties": {
                    "sourceVolume": { "type": "string" },
                    "containerPath": { "type": "string" },
                    "readOnly": { "type": "boolean" }
                }
            },
            "volumeFrom": {
                "type": "object",
                "properties": {
                    "sourceContainer": { "type": "string" },
                    "readOnly": { "type": "boolean" }
                }
            },
            "logConfiguration": {
                "type": "object",
                "required": ["logDriver"],
                "properties": {
                    "logDriver": { "type": "string" },
                    "options": {
                        "type": "object",
                        "additionalProperties": { "type": "string" }
                    },
                    "secretOptions": {
                        "type": "array",
                        "items": { "$ref": "#/definitions/secret" }
                    }
                }
            },
            "ulimit": {
                "type": "object",
                "required": ["name", "softLimit", "hardLimit"],
                "properties": {
                    "name": { "type": "string" },
                    "softLimit": { "type": "integer" },
                    "hardLimit": { "type": "integer" }
                }
            },
            "resourceRequirement": {
                "type": "object",
                "required": ["type", "value"],
                "properties": {
                    "type": { "enum": ["GPU", "InferenceAccelerator"] },
                    "value": { "type": "string" }
                }
            },
            "linuxParameters": {
                "type": "object",
                "properties": {
                    "capabilities": { "$ref": "#/definitions/linuxCapabilities" },
                    "devices": {
                        "type": "array",
                        "items": { "$ref": "#/definitions/linuxDevice" }
                    },
                    "initProcessEnabled": { "type": "boolean" },
                    "sharedMemorySize": { "type": "integer" },
                    "tmpfs": {
                        "type": "array",
                        "items": { "$ref": "#/definitions/linuxTmpfs" }
                    }
                }
            },
            "linuxCapabilities": {
                "type": "object",
                "properties": {
                    "add": { "type": "array", "items": { "type": "string" } },
                    "drop": { "type": "array", "items": { "type": "string" } }
                }
            },
            "linuxDevice": {
                "type": "object",
                "required": ["hostPath"],
                "properties": {
                    "hostPath": { "type": "string" },
                    "containerPath": { "type": "string" },
                    "permissions": { "type": "array", "items": { "type": "string" } }
                }
            },
            "linuxTmpfs": {
                "type": "object",
                "required": ["containerPath"],
                "properties": {
                    "containerPath": { "type": "string" },
                    "mountOptions": { "type": "array", "items": { "type": "string" } },
                    "size": { "type": "integer" }
                }
            },
            "volume": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "host": { "$ref": "#/definitions/volumeHost" },
                    "dockerVolumeConfiguration": {
                        "$ref": "#/definitions/dockerVolumeConfiguration"
                    },
                    "efsVolumeConfiguration": {
                        "$ref": "#/definitions/efsVolumeConfiguration"
                    }
                }
            },
            "volumeHost": {
                "type": "object",
                "properties": {
                    "sourcePath": { "type": "string" }
                }
            },
            "dockerVolumeConfiguration": {
                "type": "object",
                "properties": {
                    "scope": { "enum": ["task", "shared"] },
                    "autoprovision": { "type": "boolean" },
                    "driver": { "type": "string" },
                    "driverOpts": {
                        "type": "object",
                        "additionalProperties": { "type": "string" }
                    },
                    "labels": {
                        "type": "object",
                        "additionalProperties": { "type": "string" }
                    }
                }
            },
            "efsVolumeConfiguration": {
                "type": "object",
                "required": ["fileSystemId"],
                "properties": {
                    "fileSystemId": { "type": "string" },
                    "rootDirectory": { "type": "string" },
                    "transitEncryption": { "enum": ["ENABLED", "DISABLED"] },
                    "transitEncryptionPort": { "type": "integer" },
                    "authorizationConfig": {
                        "$ref": "#/definitions/efsAuthorizationConfig"
                    }
                }
            },
            "efsAuthorizationConfig": {
                "type": "object",
                "properties": {
                    "accessPointId": { "type": "string" },
                    "iam": { "enum": ["ENABLED", "DISABLED"] }
                }
            },
            "placementConstraint": {
                "type": "object",
                "required": ["type"],
                "properties": {
                    "type": { "type": "string" },
                    "expression": { "type": "string" }
                }
            }
        })
    }

    /// Schema for one entry of `containerDefinitions`.
    fn container_definition_schema(&self) -> Value {
        json!({
            "type": "object",
            "required": ["name", "image"],
            "properties": {
                "name": { "type": "string" },
                "image": { "type": "string" },
                "memory": { "type": "integer" },
                "memoryReservation": { "type": "integer" },
                "cpu": { "type": "integer" },
                "essential": { "type": "boolean" },
                "portMappings": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/portMapping" }
                },
                "healthCheck": { "$ref": "#/definitions/healthCheck" },
                "entryPoint": { "type": "array", "items": { "type": "string" } },
                "command": { "type": "array", "items": { "type": "string" } },
                "workingDirectory": { "type": "string" },
                "environment": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/environmentVariable" }
                },
                "secrets": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/secret" }
                },
                "disableNetworking": { "type": "boolean" },
                "links": { "type": "array", "items": { "type": "string" } },
                "hostname": { "type": "string" },
                "dnsServers": { "type": "array", "items": { "type": "string" } },
                "dnsSearchDomains": { "type": "array", "items": { "type": "string" } },
                "extraHosts": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/extraHost" }
                },
                "readonlyRootFilesystem": { "type": "boolean" },
                "mountPoints": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/mountPoint" }
                },
                "volumesFrom": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/volumeFrom" }
                },
                "logConfiguration": { "$ref": "#/definitions/logConfiguration" },
                "privileged": { "type": "boolean" },
                "user": { "type": "string" },
                "dockerSecurityOptions": { "type": "array", "items": { "type": "string" } },
                "ulimits": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/ulimit" }
                },
                "dockerLabels": {
                    "type": "object",
                    "additionalProperties": { "type": "string" }
                },
                "linuxParameters": { "$ref": "#/definitions/linuxParameters" },
                "stopTimeout": { "type": "integer" },
                "startTimeout": { "type": "integer" },
                "resourceRequirements": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/resourceRequirement" }
                }
            }
        })
    }
}

impl Default for TaskDefinitionSchema {
    fn default() -> Self {
        Self::new()
    }
}
