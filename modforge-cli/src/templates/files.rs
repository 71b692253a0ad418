//! Embedded template bodies for the four module files
//!
//! Bindings available to every template:
//! `name`, `Name`, `names`, `Names`, `kebab`, `route_path`, `import_prefix`.

/// Express controller wrapping the service in the shared async/response helpers
pub const CONTROLLER_TS: &str = r"
import { Request, Response } from 'express';
import httpStatus from 'http-status';
import catchAsync from '{{import_prefix}}shared/catchAsync';
import sendResponse from '{{import_prefix}}shared/sendResponse';
import { {{Name}}Service } from './{{name}}.service';

const create{{Name}} = catchAsync(async (req: Request, res: Response) => {
  const result = await {{Name}}Service.create{{Name}}(req.body);

  sendResponse(res, {
    statusCode: httpStatus.CREATED,
    success: true,
    message: '{{Name}} created successfully',
    data: result,
  });
});

const getAll{{Names}} = catchAsync(async (_req: Request, res: Response) => {
  const result = await {{Name}}Service.getAll{{Names}}();

  sendResponse(res, {
    statusCode: httpStatus.OK,
    success: true,
    message: '{{Names}} retrieved successfully',
    data: result,
  });
});

const get{{Name}}ById = catchAsync(async (req: Request, res: Response) => {
  const result = await {{Name}}Service.get{{Name}}ById(req.params.id);

  sendResponse(res, {
    statusCode: httpStatus.OK,
    success: true,
    message: '{{Name}} retrieved successfully',
    data: result,
  });
});

const update{{Name}} = catchAsync(async (req: Request, res: Response) => {
  const result = await {{Name}}Service.update{{Name}}(req.params.id, req.body);

  sendResponse(res, {
    statusCode: httpStatus.OK,
    success: true,
    message: '{{Name}} updated successfully',
    data: result,
  });
});

const delete{{Name}} = catchAsync(async (req: Request, res: Response) => {
  const result = await {{Name}}Service.delete{{Name}}(req.params.id);

  sendResponse(res, {
    statusCode: httpStatus.OK,
    success: true,
    message: '{{Name}} deleted successfully',
    data: result,
  });
});

export const {{Name}}Controller = {
  create{{Name}},
  getAll{{Names}},
  get{{Name}}ById,
  update{{Name}},
  delete{{Name}},
};
";

/// Express router mounting the controller handlers
pub const ROUTE_TS: &str = r"
import express from 'express';
import validateRequest from '{{import_prefix}}middlewares/validateRequest';
import { {{Name}}Controller } from './{{name}}.controller';
import { {{Name}}Validation } from './{{name}}.validation';

const router = express.Router();

router.post(
  '/',
  validateRequest({{Name}}Validation.create{{Name}}Schema),
  {{Name}}Controller.create{{Name}},
);

router.get('/', {{Name}}Controller.getAll{{Names}});

router.get('/:id', {{Name}}Controller.get{{Name}}ById);

router.patch(
  '/:id',
  validateRequest({{Name}}Validation.update{{Name}}Schema),
  {{Name}}Controller.update{{Name}},
);

router.delete('/:id', {{Name}}Controller.delete{{Name}});

// Mount with: app.use('{{route_path}}', {{Name}}Routes);
export const {{Name}}Routes = router;
";

/// Prisma-backed service
pub const SERVICE_TS: &str = r"
import { {{Name}} } from '@prisma/client';
import httpStatus from 'http-status';
import ApiError from '{{import_prefix}}errors/ApiError';
import prisma from '{{import_prefix}}shared/prisma';

const create{{Name}} = async (payload: {{Name}}): Promise<{{Name}}> => {
  return prisma.{{name}}.create({ data: payload });
};

const getAll{{Names}} = async (): Promise<{{Name}}[]> => {
  return prisma.{{name}}.findMany();
};

const get{{Name}}ById = async (id: string): Promise<{{Name}}> => {
  const result = await prisma.{{name}}.findUnique({ where: { id } });

  if (!result) {
    throw new ApiError(httpStatus.NOT_FOUND, '{{Name}} not found');
  }

  return result;
};

const update{{Name}} = async (
  id: string,
  payload: Partial<{{Name}}>,
): Promise<{{Name}}> => {
  await get{{Name}}ById(id);

  return prisma.{{name}}.update({ where: { id }, data: payload });
};

const delete{{Name}} = async (id: string): Promise<{{Name}}> => {
  await get{{Name}}ById(id);

  return prisma.{{name}}.delete({ where: { id } });
};

export const {{Name}}Service = {
  create{{Name}},
  getAll{{Names}},
  get{{Name}}ById,
  update{{Name}},
  delete{{Name}},
};
";

/// Zod request schemas
pub const VALIDATION_TS: &str = r"
import { z } from 'zod';

const create{{Name}}Schema = z.object({
  body: z.object({
    name: z.string({ required_error: 'Name is required' }),
  }),
});

const update{{Name}}Schema = z.object({
  body: z.object({
    name: z.string().optional(),
  }),
});

export const {{Name}}Validation = {
  create{{Name}}Schema,
  update{{Name}}Schema,
};
";
